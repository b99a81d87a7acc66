//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default API server, only edit this file.

/// Default prediction API base URL
///
/// This is the fallback URL when no environment variable is set.
/// The Flask backend serves its API under the `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "CardioCheck";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get API base URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("CARDIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_request_timeout() -> u64 {
    std::env::var("CARDIO_REQUEST_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
}
