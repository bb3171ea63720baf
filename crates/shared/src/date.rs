use serde::Serializer;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Current time as unix seconds, the representation every table stores.
pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

pub fn to_rfc3339(timestamp: i64) -> crate::Result<String> {
    let date = OffsetDateTime::from_unix_timestamp(timestamp).map_err(anyhow::Error::from)?;

    Ok(date.format(&Rfc3339)?)
}

/// Serializes a stored unix timestamp as an RFC 3339 string.
pub fn serialize_timestamp<S: Serializer>(timestamp: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = to_rfc3339(*timestamp).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch() {
        assert_eq!(to_rfc3339(0).unwrap(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn serializes_field() {
        #[derive(serde::Serialize)]
        struct Row {
            #[serde(serialize_with = "serialize_timestamp")]
            created_at: i64,
        }

        let json = serde_json::to_string(&Row {
            created_at: 1_700_000_000,
        })
        .unwrap();
        assert_eq!(json, r#"{"created_at":"2023-11-14T22:13:20Z"}"#);
    }
}
