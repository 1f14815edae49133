// Application state module
// Immutable runtime state shared by all request handlers

use std::time::Instant;

use super::types::Config;
use crate::handler::pages;

/// Application state
///
/// Everything here is fixed at startup and shared read-only across
/// connection tasks. The embedded document is resolved once so request
/// handlers serve the same `&'static str` without copying.
pub struct AppState {
    pub config: Config,
    /// The embedded document served for `/` and `/index.html`
    pub document: &'static str,
    /// Process start time, reported by the health endpoint
    started: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            document: pages::for_variant(config.page.variant),
            started: Instant::now(),
        }
    }

    /// Seconds since process start, monotonically non-decreasing
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::config::PageVariant;

    #[test]
    fn test_document_follows_variant() {
        let mut config = test_config();
        config.page.variant = PageVariant::Webcam;
        assert_eq!(AppState::new(&config).document, pages::WEBCAM_PAGE);

        config.page.variant = PageVariant::FaceDetect;
        assert_eq!(AppState::new(&config).document, pages::FACE_DETECT_PAGE);
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let state = AppState::new(&test_config());
        let first = state.uptime_secs();
        let second = state.uptime_secs();
        assert!(second >= first);
    }
}
