//! Site-wide settings record.

use serde::{Deserialize, Serialize};

/// Domain shown until the administrator configures one.
pub const DEFAULT_DOMAIN: &str = "www.myshop.com";

/// Name servers shown until the administrator configures them.
pub const DEFAULT_NAME_SERVERS: [&str; 2] = ["ns1.example.com", "ns2.example.com"];

/// The singleton settings record edited from the admin panel.
///
/// Empty strings mean "disabled" for the tracking IDs and the webhook URL.
/// No field is validated; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    pub fb_pixel: String,
    pub google_pixel: String,
    pub tiktok_pixel: String,
    /// Spreadsheet webhook that receives every new order.
    pub google_sheets_url: String,
    pub domain: String,
    /// Fixed-size list edited in place.
    pub name_servers: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            fb_pixel: String::new(),
            google_pixel: String::new(),
            tiktok_pixel: String::new(),
            google_sheets_url: String::new(),
            domain: DEFAULT_DOMAIN.to_string(),
            name_servers: DEFAULT_NAME_SERVERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl SiteSettings {
    /// The configured order webhook, if any.
    #[must_use]
    pub fn webhook_url(&self) -> Option<&str> {
        let url = self.google_sheets_url.trim();
        (!url.is_empty()).then_some(url)
    }

    /// The three tracking identifiers.
    #[must_use]
    pub fn pixels(&self) -> TrackingPixels {
        TrackingPixels {
            fb_pixel: self.fb_pixel.clone(),
            google_pixel: self.google_pixel.clone(),
            tiktok_pixel: self.tiktok_pixel.clone(),
        }
    }
}

/// Tracking identifiers handed to the pixel injector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingPixels {
    pub fb_pixel: String,
    pub google_pixel: String,
    pub tiktok_pixel: String,
}

impl TrackingPixels {
    /// `(platform, id)` for every non-empty identifier.
    pub fn configured(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("facebook", self.fb_pixel.as_str()),
            ("google", self.google_pixel.as_str()),
            ("tiktok", self.tiktok_pixel.as_str()),
        ]
        .into_iter()
        .filter(|(_, id)| !id.is_empty())
    }
}

/// A partial settings update; `None` leaves the field unchanged.
///
/// Name servers are not part of a patch; they are edited one slot at a time
/// through [`crate::Settings::set_name_server`] so the list keeps its length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub fb_pixel: Option<String>,
    pub google_pixel: Option<String>,
    pub tiktok_pixel: Option<String>,
    pub google_sheets_url: Option<String>,
    pub domain: Option<String>,
}

impl SettingsPatch {
    /// Whether the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fb_pixel.is_none()
            && self.google_pixel.is_none()
            && self.tiktok_pixel.is_none()
            && self.google_sheets_url.is_none()
            && self.domain.is_none()
    }

    /// Merge the supplied fields over `settings`.
    pub fn apply_to(self, settings: &mut SiteSettings) {
        let Self {
            fb_pixel,
            google_pixel,
            tiktok_pixel,
            google_sheets_url,
            domain,
        } = self;

        if let Some(value) = fb_pixel {
            settings.fb_pixel = value;
        }
        if let Some(value) = google_pixel {
            settings.google_pixel = value;
        }
        if let Some(value) = tiktok_pixel {
            settings.tiktok_pixel = value;
        }
        if let Some(value) = google_sheets_url {
            settings.google_sheets_url = value;
        }
        if let Some(value) = domain {
            settings.domain = value;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SiteSettings::default();
        assert_eq!(settings.domain, DEFAULT_DOMAIN);
        assert_eq!(settings.name_servers.len(), 2);
        assert!(settings.webhook_url().is_none());
        assert_eq!(settings.pixels().configured().count(), 0);
    }

    #[test]
    fn test_patch_merges_only_supplied_fields() {
        let mut settings = SiteSettings::default();
        let patch = SettingsPatch {
            fb_pixel: Some("123".to_string()),
            ..SettingsPatch::default()
        };
        patch.apply_to(&mut settings);
        assert_eq!(settings.fb_pixel, "123");
        assert_eq!(settings.domain, DEFAULT_DOMAIN);
    }

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"googleSheetsUrl":"https://hook"}"#).unwrap();
        assert_eq!(patch.google_sheets_url.as_deref(), Some("https://hook"));
        assert!(patch.domain.is_none());
        assert!(!patch.is_empty());
        assert!(SettingsPatch::default().is_empty());
    }

    #[test]
    fn test_patch_json_cannot_resize_name_servers() {
        let mut settings = SiteSettings::default();
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"nameServers":["only-one"],"domain":"shop.ma"}"#).unwrap();
        patch.apply_to(&mut settings);
        assert_eq!(settings.domain, "shop.ma");
        assert_eq!(settings.name_servers, DEFAULT_NAME_SERVERS);
    }

    #[test]
    fn test_blank_webhook_is_disabled() {
        let settings = SiteSettings {
            google_sheets_url: "   ".to_string(),
            ..SiteSettings::default()
        };
        assert!(settings.webhook_url().is_none());
    }

    #[test]
    fn test_configured_pixels_skip_empty() {
        let pixels = TrackingPixels {
            fb_pixel: "fb-1".to_string(),
            google_pixel: String::new(),
            tiktok_pixel: "tt-1".to_string(),
        };
        let configured: Vec<_> = pixels.configured().collect();
        assert_eq!(configured, vec![("facebook", "fb-1"), ("tiktok", "tt-1")]);
    }
}
