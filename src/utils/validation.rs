//! URL and input validation utilities

use anyhow::{anyhow, Result};
use url::Url;

/// Validate URL format
pub fn validate_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| anyhow!("Invalid URL format: {}", e))
}

/// Check if URL is an http(s) URL
pub fn is_http_url(url: &str) -> bool {
    if let Ok(parsed) = Url::parse(url) {
        let scheme = parsed.scheme();
        scheme == "http" || scheme == "https"
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://www.googleapis.com/youtube/v3").is_ok());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("http://127.0.0.1:8080"));
        assert!(is_http_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("youtube.com"));
    }
}
