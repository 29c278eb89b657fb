//! Site settings.

use clap::Args;
use nokhba_core::{NotFound, SettingsPatch, SiteSettings};
use nokhba_storefront::shop::Shop;
use tracing::{info, warn};

/// Fields accepted by `settings set`. Omitted flags leave a field unchanged;
/// an empty value clears it.
#[derive(Debug, Default, Args)]
pub struct SetArgs {
    /// Facebook pixel ID
    #[arg(long)]
    pub fb_pixel: Option<String>,

    /// Google Analytics ID
    #[arg(long)]
    pub google_pixel: Option<String>,

    /// TikTok pixel ID
    #[arg(long)]
    pub tiktok_pixel: Option<String>,

    /// Spreadsheet webhook that receives new orders
    #[arg(long)]
    pub sheets_url: Option<String>,

    /// Shop domain
    #[arg(long)]
    pub domain: Option<String>,
}

impl From<SetArgs> for SettingsPatch {
    fn from(args: SetArgs) -> Self {
        Self {
            fb_pixel: args.fb_pixel,
            google_pixel: args.google_pixel,
            tiktok_pixel: args.tiktok_pixel,
            google_sheets_url: args.sheets_url,
            domain: args.domain,
        }
    }
}

fn log_settings(settings: &SiteSettings) {
    info!(
        fb_pixel = %settings.fb_pixel,
        google_pixel = %settings.google_pixel,
        tiktok_pixel = %settings.tiktok_pixel,
        google_sheets_url = %settings.google_sheets_url,
        domain = %settings.domain,
        name_servers = ?settings.name_servers,
        "Settings"
    );
}

pub fn show(shop: &Shop) {
    log_settings(shop.settings());
}

/// Merge the given flags into the settings.
///
/// # Errors
///
/// Returns an error message if no flag was given.
pub fn set(shop: &mut Shop, args: SetArgs) -> Result<(), String> {
    let patch = SettingsPatch::from(args);
    if patch.is_empty() {
        warn!("Nothing to update");
        return Err("pass at least one field to set".to_string());
    }
    log_settings(&shop.update_settings(patch));
    Ok(())
}

/// Edit one name-server entry.
///
/// # Errors
///
/// Returns `NotFound` if `index` is outside the list.
pub fn name_server(shop: &mut Shop, index: usize, value: String) -> Result<(), NotFound> {
    let settings = shop.set_name_server(index, value)?;
    log_settings(&settings);
    Ok(())
}
