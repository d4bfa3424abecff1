//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Production catalog API, used when `SERVICE_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "https://maha-spa-api.hifiveplus.vn";

/// Requests still pending after this many milliseconds are aborted
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the base URL for API requests
///
/// # Returns
/// - `SERVICE_API_BASE` from the build environment, or [`DEFAULT_API_BASE`],
///   without trailing slashes
pub fn api_base() -> String {
    option_env!("SERVICE_API_BASE")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Join a base URL and a path, with exactly one slash between them
///
/// # Example
/// ```ignore
/// let url = join_url("https://api.example/", "/languages");
/// assert_eq!(url, "https://api.example/languages");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.b", "/languages"), "https://a.b/languages");
        assert_eq!(join_url("https://a.b/", "languages"), "https://a.b/languages");
        assert_eq!(
            join_url("https://a.b//", "//services/new"),
            "https://a.b/services/new"
        );
    }

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("http"));
    }
}
