//! Error body returned by the API (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// Problem type of a rejected field value.
pub const VALIDATION_PROBLEM: &str = "/problems/validation";
/// Problem type of a reference to a missing author or post.
pub const NOT_FOUND_PROBLEM: &str = "/problems/not-found";

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// The domain message, e.g. "Title cannot be empty".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = error_type.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 400 for a value rejected by an entity rule.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request")
            .with_type(VALIDATION_PROBLEM)
            .with_detail(detail)
    }

    /// 400 for a request the server could not decode.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found")
            .with_type(NOT_FOUND_PROBLEM)
            .with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
