//! Query-string encoding for list/filter options.

use crate::error::HttpError;
use serde::Serialize;

/// Append the URL-encoded `options` to `path`.
///
/// Option structs mark their fields with
/// `#[serde(skip_serializing_if = "is_zero")]`, so fields left at their zero
/// value never reach the query string. With no options, or when every field
/// is zero, the path comes back unchanged.
pub fn with_query<Q: Serialize + ?Sized>(path: &str, options: Option<&Q>) -> Result<String, HttpError> {
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    let query = serde_urlencoded::to_string(options)?;
    if query.is_empty() {
        return Ok(path.to_string());
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", path, separator, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::shared::is_zero;

    #[derive(Default, Serialize)]
    struct Filter {
        #[serde(skip_serializing_if = "is_zero")]
        name: String,
        #[serde(skip_serializing_if = "is_zero")]
        size: u32,
        #[serde(skip_serializing_if = "is_zero")]
        offset: String,
    }

    #[test]
    fn test_no_options_keeps_path() {
        assert_eq!(with_query("plugins", None::<&Filter>).unwrap(), "plugins");
    }

    #[test]
    fn test_all_zero_options_keep_path() {
        assert_eq!(with_query("plugins", Some(&Filter::default())).unwrap(), "plugins");
    }

    #[test]
    fn test_single_field_single_key() {
        let filter = Filter {
            size: 10,
            ..Default::default()
        };
        assert_eq!(with_query("plugins", Some(&filter)).unwrap(), "plugins?size=10");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let filter = Filter {
            name: "rate limiting".into(),
            offset: "abc=/+".into(),
            ..Default::default()
        };
        assert_eq!(
            with_query("plugins", Some(&filter)).unwrap(),
            "plugins?name=rate+limiting&offset=abc%3D%2F%2B"
        );
    }

    #[test]
    fn test_appends_to_existing_query() {
        let filter = Filter {
            size: 2,
            ..Default::default()
        };
        assert_eq!(
            with_query("plugins?name=acl", Some(&filter)).unwrap(),
            "plugins?name=acl&size=2"
        );
    }

    #[test]
    fn test_unencodable_options_are_construction_errors() {
        #[derive(Serialize)]
        struct Nested {
            inner: Vec<u8>,
        }

        let err = with_query("plugins", Some(&Nested { inner: vec![1, 2] })).unwrap_err();
        assert!(matches!(err, HttpError::Query(_)));
        assert_eq!(err.kind(), ErrorKind::Construction);
    }
}
