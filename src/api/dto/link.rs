//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// A missing, null or non-string `url` deserializes as `None` and is rejected
/// as an invalid URL by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL (must be absolute).
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,

    /// Optional caller-chosen code; generated when omitted or empty.
    #[serde(default)]
    pub code: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(url) => Some(url),
        _ => None,
    })
}

/// Response to a successful create.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub code: String,
    pub url: String,
}

impl From<Link> for CreateLinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
        }
    }
}

/// Public representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            created_at: link.created_at,
            last_clicked: link.last_clicked,
        }
    }
}

/// Confirmation message for delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_missing_url_is_none() {
        let req: CreateLinkRequest = serde_json::from_value(json!({ "code": "abc123" })).unwrap();

        assert!(req.url.is_none());
    }

    #[test]
    fn test_create_request_non_string_url_is_none() {
        for url in [json!(null), json!(42), json!(["https://example.com"])] {
            let req: CreateLinkRequest = serde_json::from_value(json!({ "url": url })).unwrap();
            assert!(req.url.is_none());
        }
    }

    #[test]
    fn test_create_request_malformed_url_fails_validation() {
        let req: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "not a url" })).unwrap();

        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("url"));
    }

    #[test]
    fn test_create_request_valid() {
        let req: CreateLinkRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();

        assert!(req.validate().is_ok());
        assert!(req.code.is_none());
    }

    #[test]
    fn test_link_response_shape() {
        let link = Link::new(
            7,
            "aB3dE9".to_string(),
            "https://example.com".to_string(),
            2,
            Utc::now(),
            None,
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(value["code"], "aB3dE9");
        assert_eq!(value["clicks"], 2);
        assert!(value["last_clicked"].is_null());
        assert!(value["created_at"].is_string());
        assert!(value.get("id").is_none());
    }
}
