//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `NOKHBA_HOST` - Bind address (default: 127.0.0.1)
//! - `NOKHBA_PORT` - Listen port (default: 3000)
//! - `NOKHBA_DATA_DIR` - Directory holding the persisted JSON slices (default: .nokhba)
//! - `NOKHBA_STORAGE` - `file` or `memory` (default: file)
//! - `NOKHBA_WEBHOOK_MODE` - `log` to only log order webhooks, `http` to POST them (default: log)
//! - `NOKHBA_WEBHOOK_TIMEOUT_SECS` - Per-delivery timeout for `http` mode (default: 10)
//! - `NOKHBA_LOG_JSON` - Emit JSON logs when set to `1` or `true`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where shop state is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One JSON file per slice in `data_dir`.
    #[default]
    File,
    /// Process memory only.
    Memory,
}

/// How new orders reach the configured webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebhookMode {
    /// Log the order that would have been sent.
    #[default]
    Log,
    /// POST the order as JSON, once, without retrying.
    Http,
}

/// Outbound order webhook configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub mode: WebhookMode,
    pub timeout: Duration,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            mode: WebhookMode::Log,
            timeout: Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        }
    }
}

const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory for persisted state
    pub data_dir: PathBuf,
    /// Storage backend
    pub storage: StorageBackend,
    /// Order webhook delivery
    pub webhook: WebhookConfig,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            data_dir: PathBuf::from(".nokhba"),
            storage: StorageBackend::File,
            webhook: WebhookConfig::default(),
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_var(&lookup, "NOKHBA_HOST", defaults.host, |v| {
            v.parse::<IpAddr>().map_err(|e| e.to_string())
        })?;
        let port = parse_var(&lookup, "NOKHBA_PORT", defaults.port, |v| {
            v.parse::<u16>().map_err(|e| e.to_string())
        })?;
        let data_dir = lookup("NOKHBA_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let storage = parse_var(&lookup, "NOKHBA_STORAGE", defaults.storage, parse_storage)?;
        let mode = parse_var(
            &lookup,
            "NOKHBA_WEBHOOK_MODE",
            defaults.webhook.mode,
            parse_webhook_mode,
        )?;
        let timeout = parse_var(
            &lookup,
            "NOKHBA_WEBHOOK_TIMEOUT_SECS",
            defaults.webhook.timeout,
            |v| match v.parse::<u64>() {
                Ok(0) => Err("must be greater than zero".to_string()),
                Ok(secs) => Ok(Duration::from_secs(secs)),
                Err(e) => Err(e.to_string()),
            },
        )?;
        let log_json = lookup("NOKHBA_LOG_JSON").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            host,
            port,
            data_dir,
            storage,
            webhook: WebhookConfig { mode, timeout },
            log_json,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => {
            parse(value.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
        }
        None => Ok(default),
    }
}

fn parse_storage(value: &str) -> Result<StorageBackend, String> {
    match value.to_ascii_lowercase().as_str() {
        "file" => Ok(StorageBackend::File),
        "memory" => Ok(StorageBackend::Memory),
        other => Err(format!("expected `file` or `memory`, got `{other}`")),
    }
}

fn parse_webhook_mode(value: &str) -> Result<WebhookMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "log" => Ok(WebhookMode::Log),
        "http" => Ok(WebhookMode::Http),
        other => Err(format!("expected `log` or `http`, got `{other}`")),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
