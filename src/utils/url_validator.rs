//! Destination URL validation.
//!
//! A destination is accepted when it parses as an absolute URL. The scheme is
//! not restricted and the URL is stored exactly as submitted.

use crate::error::AppError;
use url::Url;

/// Validates that `url` is a well-formed absolute URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with message `Invalid URL` for empty,
/// relative or otherwise unparsable input.
pub fn validate_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::bad_request("Invalid URL"));
    }

    Url::parse(url)
        .map(|_| ())
        .map_err(|_| AppError::bad_request("Invalid URL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        for url in [
            "https://example.com",
            "http://localhost:8080/path?q=1#frag",
            "https://EXAMPLE.com/Case/Sensitive",
            "ftp://files.example.com/pub",
            "mailto:someone@example.com",
        ] {
            assert!(validate_url(url).is_ok(), "{url} should be accepted");
        }
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        for url in ["", "not-a-url", "/relative/path", "example.com", "http://"] {
            assert!(validate_url(url).is_err(), "{url} should be rejected");
        }
    }

    #[test]
    fn test_error_message() {
        let err = validate_url("not-a-url").unwrap_err();
        assert_eq!(err.public_message(), "Invalid URL");
    }
}
