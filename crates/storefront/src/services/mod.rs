//! Outbound collaborators of the shop.
//!
//! # Services
//!
//! - `webhook` - Hands each new order to the spreadsheet webhook
//! - `pixels` - Installs the configured analytics pixels

pub mod pixels;
pub mod webhook;

use std::sync::Arc;

pub use pixels::{LoggingPixelInjector, PixelInjector};
pub use webhook::{DeliveryError, LoggingNotifier, OrderNotifier, WebhookNotifier};

use crate::config::{WebhookConfig, WebhookMode};

/// Build the order notifier selected by configuration.
///
/// # Errors
///
/// Returns `DeliveryError` if the HTTP client for `http` mode cannot be built.
pub fn notifier_from_config(
    config: &WebhookConfig,
) -> Result<Arc<dyn OrderNotifier>, DeliveryError> {
    Ok(match config.mode {
        WebhookMode::Log => Arc::new(LoggingNotifier),
        WebhookMode::Http => Arc::new(WebhookNotifier::new(config.timeout)?),
    })
}
