//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a track identifier is non-empty and free of whitespace.
///
/// Identifiers are opaque strings assigned by the streaming service, so no
/// particular alphabet or length is enforced beyond basic sanity.
pub fn validate_track_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        let mut err = ValidationError::new("track_id_empty");
        err.message = Some("Track ID must not be empty".into());
        return Err(err);
    }

    if id.chars().any(char::is_whitespace) {
        let mut err = ValidationError::new("track_id_whitespace");
        err.message = Some("Track ID must not contain whitespace".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a session type label: non-empty and reasonably short.
pub fn validate_session_type(session_type: &str) -> Result<(), ValidationError> {
    if session_type.trim().is_empty() {
        let mut err = ValidationError::new("session_type_empty");
        err.message = Some("Session type must not be empty".into());
        return Err(err);
    }

    if session_type.len() > 64 {
        let mut err = ValidationError::new("session_type_length");
        err.message = Some("Session type must be at most 64 characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_track_id_valid() {
        assert!(validate_track_id("4uLU6hMCjMI75M1A2tKUQC").is_ok());
        assert!(validate_track_id("a1").is_ok());
    }

    #[test]
    fn test_validate_track_id_invalid() {
        assert!(validate_track_id("").is_err());
        assert!(validate_track_id("a 1").is_err()); // space
        assert!(validate_track_id("a\t1").is_err()); // tab
    }

    #[test]
    fn test_validate_session_type() {
        assert!(validate_session_type("listening_party").is_ok());
        assert!(validate_session_type("").is_err());
        assert!(validate_session_type("   ").is_err());
        assert!(validate_session_type(&"x".repeat(65)).is_err());
    }
}
