//! Analytics pixel injection.

use nokhba_core::TrackingPixels;

/// Receives the tracking identifiers at startup and whenever one changes.
pub trait PixelInjector: Send + Sync {
    /// Install the given pixels, replacing any previously installed set.
    fn inject(&self, pixels: &TrackingPixels);
}

/// Logs each configured pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPixelInjector;

impl PixelInjector for LoggingPixelInjector {
    fn inject(&self, pixels: &TrackingPixels) {
        let mut count = 0_usize;
        for (platform, id) in pixels.configured() {
            tracing::info!(platform, pixel_id = id, "Tracking pixel active");
            count += 1;
        }
        if count == 0 {
            tracing::debug!("No tracking pixels configured");
        }
    }
}
