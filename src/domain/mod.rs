//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Public types for the resource
//! - `wire.rs` — Serde structs matching Admin API payloads
//! - `client.rs` — Sub-client with the resource's HTTP methods

pub mod certificate;
pub mod plugin;

use crate::error::SdkError;
use std::borrow::Cow;

/// Percent-encode a caller-supplied path segment; empty segments are rejected.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn path_segment<'a>(value: &'a str, what: &str) -> Result<Cow<'a, str>, SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_encodes() {
        assert_eq!(path_segment("example.com", "sni").unwrap(), "example.com");
        assert_eq!(path_segment("a/b c", "name").unwrap(), "a%2Fb%20c");
    }

    #[test]
    fn test_path_segment_rejects_empty() {
        let err = path_segment("  ", "plugin id").unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref m) if m == "plugin id cannot be empty"));
    }
}
