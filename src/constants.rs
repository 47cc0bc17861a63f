//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! To change the default artifact directory, only edit this file.

use std::time::Duration;

/// Default directory holding exported model artifacts
pub const DEFAULT_MODELS_DIR: &str = "ml_models";

/// Default timeout for the best-effort article fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// How much article body text is kept after a successful fetch (chars)
pub const ARTICLE_CONTENT_LIMIT: usize = 500;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "triage-core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact directory from environment or use default
pub fn models_dir() -> String {
    std::env::var("TRIAGE_MODELS_DIR").unwrap_or_else(|_| DEFAULT_MODELS_DIR.to_string())
}

/// Get article fetch timeout from environment or use default
pub fn fetch_timeout() -> Duration {
    let secs = std::env::var("TRIAGE_FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Check if article enrichment is enabled
pub fn article_fetch_enabled() -> bool {
    std::env::var("TRIAGE_ARTICLE_FETCH")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
