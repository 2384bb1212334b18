//! DTO definitions for the session flags REST surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response reporting whether the listening session is open.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatusResponse {
    /// `active` or `inactive`.
    pub session: String,
}

impl SessionStatusResponse {
    /// Build the response from the active flag.
    pub fn from_active(active: bool) -> Self {
        Self {
            session: if active { "active" } else { "inactive" }.into(),
        }
    }
}

/// Request toggling the session active flag.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSessionRequest {
    /// `active` opens the session; any other value closes it.
    pub session: String,
}

/// Acknowledgement returned after toggling the session, echoing the new state.
#[derive(Debug, Serialize, ToSchema)]
pub struct SetSessionResponse {
    pub success: bool,
    pub session: String,
}

/// Response carrying the session type label, `none` when unset.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionTypeResponse {
    #[serde(rename = "sessionType")]
    pub session_type: String,
}

/// Request setting the session type label.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSessionTypeRequest {
    #[serde(rename = "sessionType")]
    pub session_type: String,
}
