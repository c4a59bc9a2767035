use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text a failed exchange leaves behind in place of a response body.
pub const ERROR_SENTINEL: &str = "error";

/// Outcome of one request/response exchange with an AJAX endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub response_time: Duration,
    pub body: String,
    pub error: Option<String>,
}

impl Reply {
    pub fn new(url: String, status_code: u16, body: String) -> Self {
        Self {
            url,
            status_code,
            content_type: None,
            response_time: Duration::from_secs(0),
            body,
            error: None,
        }
    }

    /// A failed exchange. `status_code` is 0 when no HTTP response arrived.
    pub fn with_error(url: String, status_code: u16, error: String) -> Self {
        Self {
            url,
            status_code,
            content_type: None,
            response_time: Duration::from_secs(0),
            body: String::new(),
            error: Some(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// The body as older callers saw it: the raw text, or the sentinel on failure.
    pub fn legacy_text(&self) -> &str {
        if self.is_failure() {
            ERROR_SENTINEL
        } else {
            &self.body
        }
    }

    /// User-facing message for a failed exchange.
    pub fn failure_notice(&self) -> Option<String> {
        self.error.as_ref().map(|description| {
            format!(
                "Error sending request: ({}) {}",
                self.status_code, description
            )
        })
    }

    /// Whether the media type is `application/json`, ignoring case and parameters
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_reply_reads_as_sentinel() {
        let reply = Reply::with_error(
            "http://localhost/x.php".to_string(),
            500,
            "Internal Server Error".to_string(),
        );
        assert!(reply.is_failure());
        assert_eq!(reply.legacy_text(), "error");
        assert_eq!(
            reply.failure_notice().as_deref(),
            Some("Error sending request: (500) Internal Server Error")
        );
    }

    #[test]
    fn test_successful_reply_keeps_body() {
        let reply = Reply::new(
            "http://localhost/x.php".to_string(),
            200,
            "alert[*note*]hi".to_string(),
        );
        assert!(!reply.is_failure());
        assert_eq!(reply.legacy_text(), "alert[*note*]hi");
        assert_eq!(reply.failure_notice(), None);
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut reply = Reply::new("http://localhost/".to_string(), 200, "[]".to_string());
        assert!(!reply.is_json());
        reply.content_type = Some("application/json; charset=utf-8".to_string());
        assert!(reply.is_json());
    }

    #[test]
    fn test_json_media_type_is_case_insensitive() {
        let mut reply = Reply::new("http://localhost/".to_string(), 200, "[]".to_string());
        reply.content_type = Some("Application/JSON".to_string());
        assert!(reply.is_json());
        reply.content_type = Some(" APPLICATION/json ;charset=UTF-8".to_string());
        assert!(reply.is_json());
        reply.content_type = Some("text/plain; note=application/json".to_string());
        assert!(!reply.is_json());
    }
}
