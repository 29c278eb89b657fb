//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::shop::Shop;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The shop sits behind a single
/// mutex; handlers run one shop operation per lock and never hold the guard
/// across an `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    shop: Mutex<Shop>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(shop: Shop) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                shop: Mutex::new(shop),
            }),
        }
    }

    /// Run `f` with exclusive access to the shop.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a previous holder of the lock panicked.
    pub fn with_shop<T>(&self, f: impl FnOnce(&mut Shop) -> T) -> Result<T, AppError> {
        let mut shop = self
            .inner
            .shop
            .lock()
            .map_err(|_| AppError::Internal("shop state lock poisoned".to_string()))?;
        Ok(f(&mut *shop))
    }
}
