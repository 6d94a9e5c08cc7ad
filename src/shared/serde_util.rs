//! Custom serde helpers for Admin API wire formats.

/// (De)serializes an optional Unix-millis integer as `Option<DateTime<Utc>>`.
///
/// The Admin API sends `created_at` as epoch milliseconds, not ISO 8601
/// strings. Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_i64(ts.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(millis) = Option::<i64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(
            default,
            with = "super::timestamp_ms",
            skip_serializing_if = "Option::is_none"
        )]
        created_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_timestamp_ms_round_trip() {
        let parsed: Stamped = serde_json::from_str(r#"{"created_at":1485521710265}"#).unwrap();
        let ts = parsed.created_at.unwrap();
        assert_eq!(ts.timestamp_millis(), 1485521710265);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"created_at":1485521710265}"#
        );
    }

    #[test]
    fn test_timestamp_ms_missing_and_null() {
        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert!(missing.created_at.is_none());
        let null: Stamped = serde_json::from_str(r#"{"created_at":null}"#).unwrap();
        assert!(null.created_at.is_none());
        assert_eq!(serde_json::to_string(&missing).unwrap(), "{}");
    }
}
