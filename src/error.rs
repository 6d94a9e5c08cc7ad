//! Unified SDK error types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level SDK error, returned by the resource sub-clients.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Config conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SdkError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Broad error class, see [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Http(e) => e.kind(),
            SdkError::Convert(_) | SdkError::Validation(_) => ErrorKind::Construction,
        }
    }
}

/// Broad classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any network activity.
    Construction,
    /// Network, connection or timeout failure; no response was read.
    Transport,
    /// The server answered with a non-success status.
    Status,
    /// The server answered with a success status but an unparseable body.
    Decode,
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Query encoding failed: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("Request body encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {}", describe_status(.error.as_ref(), .body))]
    Status {
        status: u16,
        error: Option<ErrorResponse>,
        body: String,
    },

    #[error("Failed to decode {status} response: {source}")]
    Decode {
        status: u16,
        body: String,
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Build a status error from a raw response body, parsing Kong's error JSON when present.
    pub fn from_status(status: u16, body: String) -> Self {
        let error = serde_json::from_str::<ErrorResponse>(&body).ok();
        HttpError::Status {
            status,
            error,
            body,
        }
    }

    /// HTTP status of the response, for status and decode errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } | HttpError::Decode { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::InvalidRequest(_) | HttpError::Query(_) | HttpError::Encode(_) => {
                ErrorKind::Construction
            }
            #[cfg(feature = "http")]
            HttpError::Transport(_) => ErrorKind::Transport,
            HttpError::Status { .. } => ErrorKind::Status,
            HttpError::Decode { .. } => ErrorKind::Decode,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HttpError::Status { status: 404, .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, HttpError::Status { status: 409, .. })
    }
}

fn describe_status(error: Option<&ErrorResponse>, body: &str) -> String {
    match error.and_then(|e| e.message.as_deref()) {
        Some(message) => message.to_string(),
        None if body.is_empty() => "<empty body>".to_string(),
        None => body.to_string(),
    }
}

/// Errors raised while normalizing a typed plugin config into the generic map.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Plugin config must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Plugin config serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Error body returned by the Admin API.
///
/// Kong answers with `{"message": "..."}` for most failures; schema
/// violations additionally carry one entry per offending field, e.g.
/// `{"config.second": "must be a number"}`. Those land in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_parses_kong_message() {
        let err = HttpError::from_status(409, r#"{"message":"already exists"}"#.to_string());
        assert!(err.is_conflict());
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.to_string(), "HTTP 409: already exists");
    }

    #[test]
    fn test_from_status_keeps_field_errors() {
        let err = HttpError::from_status(400, r#"{"config.second":"must be a number"}"#.to_string());
        match err {
            HttpError::Status { error: Some(body), .. } => {
                assert!(body.message.is_none());
                assert_eq!(body.fields["config.second"], "must be a number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_empty_body() {
        let err = HttpError::from_status(404, String::new());
        assert!(err.is_not_found());
        assert!(matches!(err, HttpError::Status { error: None, .. }));
        assert_eq!(err.to_string(), "HTTP 404: <empty body>");
    }

    #[test]
    fn test_from_status_plain_text_body() {
        let err = HttpError::from_status(502, "Bad Gateway".to_string());
        assert!(matches!(err, HttpError::Status { error: None, .. }));
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_sdk_error_kind() {
        let err = SdkError::Validation("plugin id is required".into());
        assert_eq!(err.kind(), ErrorKind::Construction);
        assert_eq!(err.status(), None);

        let err = SdkError::from(HttpError::from_status(500, String::new()));
        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.status(), Some(500));
    }
}
