//! Upstream HTTP plumbing
//!
//! Shared pieces for talking to the blog API: client construction and
//! reading the error bodies it returns.

use reqwest::Client;
use serde_json::Value;

/// Maximum length for error response bodies kept in messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Errors while setting up the upstream client
#[derive(Debug, thiserror::Error)]
pub enum UpstreamSetupError {
    #[error("Invalid upstream base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build the shared HTTP client
///
/// No request timeout is set; the transport defaults apply.
/// Clone is cheap, reqwest::Client keeps its pool behind an Arc.
pub fn build_client() -> Result<Client, UpstreamSetupError> {
    Ok(Client::builder()
        .user_agent(concat!("blog-gateway/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Validate and normalize an API base URL (no trailing slash)
pub fn normalize_base_url(raw: &str) -> Result<String, UpstreamSetupError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = url::Url::parse(trimmed).map_err(|e| UpstreamSetupError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UpstreamSetupError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {}", parsed.scheme()),
        });
    }

    Ok(trimmed.to_string())
}

/// Pull a human-readable `detail` out of an error body
///
/// FastAPI answers `{"detail": "..."}` for raised errors and
/// `{"detail": [{"msg": "...", ...}]}` for validation failures.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Truncate a response body to avoid logging excessive data
pub fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid refresh token"}"#),
            Some("Invalid refresh token".to_string())
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
            {"loc": ["body", "password"], "msg": "field required", "type": "missing"}
        ]}"#;
        assert_eq!(
            extract_detail(body),
            Some("value is not a valid email address; field required".to_string())
        );
    }

    #[test]
    fn test_extract_detail_missing() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url(" http://localhost:8000/v1 ").unwrap(),
            "http://localhost:8000/v1"
        );
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");

        let long = "x".repeat(MAX_ERROR_BODY_LENGTH + 10);
        let truncated = truncate_body(&long);
        assert!(truncated.contains("truncated"));
        assert!(truncated.contains(&format!("{} total bytes", long.len())));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
