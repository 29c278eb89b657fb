//! Order webhook delivery.
//!
//! After a successful checkout the new order is handed to an
//! [`OrderNotifier`] together with the configured spreadsheet URL. Delivery
//! never blocks or fails the checkout: [`WebhookNotifier`] sends one POST on
//! a spawned task and only logs the outcome.

use std::time::Duration;

use nokhba_core::Order;
use thiserror::Error;
use url::Url;

/// Errors that can occur while delivering an order webhook.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The configured URL does not parse.
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Only `http` and `https` endpoints are contacted.
    #[error("Unsupported webhook scheme: {0}")]
    UnsupportedScheme(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Webhook returned status {0}")]
    Status(u16),
}

/// Receives every newly submitted order.
pub trait OrderNotifier: Send + Sync {
    /// Hand `order` off for delivery to `url`.
    ///
    /// Must return promptly; any network work happens in the background.
    fn notify(&self, url: &str, order: &Order);
}

/// Logs the order instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl OrderNotifier for LoggingNotifier {
    fn notify(&self, url: &str, order: &Order) {
        tracing::info!(
            url,
            order_id = %order.id,
            total = %order.total_price,
            items = order.items.len(),
            "Order webhook (log mode, not sent)"
        );
    }
}

/// POSTs the order as JSON, once, with a request timeout.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a notifier whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Send `order` to `url` and wait for the response.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` if the URL is unusable, the request fails, or
    /// the endpoint answers with a non-2xx status.
    pub async fn deliver(&self, url: &str, order: &Order) -> Result<(), DeliveryError> {
        let url = Url::parse(url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeliveryError::UnsupportedScheme(url.scheme().to_string()));
        }

        let response = self.client.post(url).json(order).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}

impl OrderNotifier for WebhookNotifier {
    fn notify(&self, url: &str, order: &Order) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(
                order_id = %order.id,
                "No async runtime available, skipping order webhook"
            );
            return;
        };

        let notifier = self.clone();
        let url = url.to_string();
        let order = order.clone();
        handle.spawn(async move {
            match notifier.deliver(&url, &order).await {
                Ok(()) => tracing::info!(order_id = %order.id, "Order webhook delivered"),
                Err(e) => tracing::warn!(
                    order_id = %order.id,
                    error = %e,
                    "Order webhook delivery failed"
                ),
            }
        });
    }
}
