//! Data Transfer Objects - the backend's JSON wire format.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// A post as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Error payload in the shape Spring-style backends emit.
/// Every field is optional; anything unparseable is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn detail(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error)
    }
}

/// ISO-8601 timestamps, with or without an offset.
///
/// Offset-bearing values are reduced to their local wall-clock time.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_local())
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(raw, FORMAT).ok())
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(at) => super::serialize(at, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_payload() {
        let body = r#"{
            "id": 1,
            "title": "Hello",
            "content": "World",
            "author": "Alice",
            "createdAt": "2024-01-05T15:04:05.123456",
            "updatedAt": null
        }"#;
        let post: PostResponse = serde_json::from_str(body).unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(
            post.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-05 15:04:05"
        );
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn test_offset_timestamp_keeps_wall_clock() {
        let at = timestamp::parse("2024-01-05T15:04:05+09:00").unwrap();
        assert_eq!(at.format("%H:%M").to_string(), "15:04");
    }

    #[test]
    fn test_missing_updated_at() {
        let body = r#"{"id":2,"title":"t","content":"c","author":"a","createdAt":"2024-01-05T15:04:05"}"#;
        let post: PostResponse = serde_json::from_str(body).unwrap();
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn test_garbage_timestamp_is_rejected() {
        let body = r#"{"id":2,"title":"t","content":"c","author":"a","createdAt":"yesterday"}"#;
        assert!(serde_json::from_str::<PostResponse>(body).is_err());
    }

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"status":500,"error":"Internal Server Error","message":""}"#)
                .unwrap();
        assert_eq!(body.detail().as_deref(), Some("Internal Server Error"));
    }
}
