//! Nokhba CLI - offline shop administration.
//!
//! Works directly on the state store the storefront uses, so run it while the
//! server is stopped or against a copy of the data directory.
//!
//! # Usage
//!
//! ```bash
//! # Write the starter catalog (refuses to replace a saved one without --force)
//! nokhba seed --force
//!
//! # Browse the catalog
//! nokhba products list --category cars --search Tesla
//!
//! # Review and update orders
//! nokhba orders list --status pending
//! nokhba orders set-status ORD-1A2B3C4D completed
//! nokhba orders stats
//!
//! # Inspect or empty the saved cart
//! nokhba cart show
//!
//! # Site settings
//! nokhba settings set --fb-pixel 1234567890 --domain shop.ma
//! nokhba settings name-server 0 ns1.shop.ma
//! ```
//!
//! # Environment Variables
//!
//! `NOKHBA_DATA_DIR` and `NOKHBA_STORAGE` select the store, as for the
//! server. `--data-dir` overrides the directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use nokhba_storefront::config::StorefrontConfig;
use nokhba_storefront::services::{LoggingNotifier, LoggingPixelInjector};
use nokhba_storefront::shop::Shop;
use nokhba_storefront::store::StateStore;
use tracing_subscriber::EnvFilter;

mod commands;

/// Log filter used when `RUST_LOG` is unset. Command output is logged at
/// `info`, so the CLI's own target must be enabled.
const DEFAULT_LOG_FILTER: &str = "nokhba=info,nokhba_storefront=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

#[derive(Parser)]
#[command(name = "nokhba")]
#[command(author, version, about = "Nokhba shop administration tools")]
struct Cli {
    /// Data directory (overrides `NOKHBA_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the starter catalog
    Seed {
        /// Replace an existing saved catalog
        #[arg(long)]
        force: bool,
    },
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Review and update orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Inspect the saved cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// View and edit site settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Category slug (`electronics`, `home`, `cars`) or `all`
        #[arg(short, long)]
        category: Option<String>,

        /// Case-sensitive name substring
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders, newest first
    List {
        /// `pending`, `completed` or `cancelled`
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Change an order's status
    SetStatus {
        /// Order ID (e.g. ORD-1A2B3C4D)
        id: String,
        /// New status
        status: String,
    },
    /// Revenue and per-status counts
    Stats,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and total
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the current settings
    Show,
    /// Update one or more settings fields
    Set(commands::settings::SetArgs),
    /// Edit one name-server entry
    NameServer {
        /// Zero-based position in the list
        index: usize,
        /// New value
        value: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let store = StateStore::from_config(&config)?;
    let mut shop = Shop::load(
        store.clone(),
        Arc::new(LoggingNotifier),
        Arc::new(LoggingPixelInjector),
    );

    match cli.command {
        Commands::Seed { force } => {
            commands::seed::run(&store, &mut shop, force)?;
        }
        Commands::Products { action } => match action {
            ProductAction::List { category, search } => {
                commands::products::list(&shop, category.as_deref(), search.as_deref())?;
            }
        },
        Commands::Orders { action } => match action {
            OrderAction::List { status } => commands::orders::list(&shop, status.as_deref())?,
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(&mut shop, &id, &status)?;
            }
            OrderAction::Stats => commands::orders::stats(&shop),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&shop),
            CartAction::Clear => commands::cart::clear(&mut shop),
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&shop),
            SettingsAction::Set(args) => commands::settings::set(&mut shop, args)?,
            SettingsAction::NameServer { index, value } => {
                commands::settings::name_server(&mut shop, index, value)?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_default_filter_enables_command_output() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let directives = filter.to_string();
        assert!(directives.contains("nokhba=info"), "{directives}");
        assert!(directives.contains("nokhba_storefront=warn"), "{directives}");
    }

    #[test]
    fn test_command_output_target_is_the_binary_crate() {
        assert!(module_path!().starts_with("nokhba::"));
    }
}
