//! API utilities for frontend-backend communication

/// Build a full API URL from the configured base and an endpoint path
///
/// Exactly one `/` separates the two parts, whatever the caller passes.
///
/// # Example
/// ```
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://localhost:8000/api", "/health");
/// assert_eq!(url, "http://localhost:8000/api/health");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
