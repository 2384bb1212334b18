//! JSON helpers shared by the services that persist records.

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::ServiceError;

/// Serialize a record for storage.
pub(crate) fn encode<T: Serialize>(key: &str, record: &T) -> Result<String, ServiceError> {
    serde_json::to_string(record)
        .map_err(|err| ServiceError::Internal(format!("failed to encode record `{key}`: {err}")))
}

/// Parse a stored record, falling back to the default on a missing or
/// malformed value. A malformed record is logged and treated as absent rather
/// than failing the request.
pub(crate) fn decode_or_default<T>(key: &str, raw: Option<String>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "failed to parse stored record; using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_falls_back_to_default() {
        let value: Vec<i64> = decode_or_default("spotify_leaderboard", Some("not json".into()));
        assert!(value.is_empty());
    }

    #[test]
    fn absent_record_falls_back_to_default() {
        let value: bool = decode_or_default("spotify_leaderboard_status", None);
        assert!(!value);
    }

    #[test]
    fn stored_record_round_trips() {
        let raw = encode("is_playing", &true).unwrap();
        let value: bool = decode_or_default("is_playing", Some(raw));
        assert!(value);
    }
}
