//! DTO definitions for the admin-token and password-verify endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response carrying the streaming-account token, empty when unset.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminTokenResponse {
    pub token: String,
    /// `active` when a token is stored, `none` otherwise.
    pub status: String,
}

impl AdminTokenResponse {
    /// Build the response from an optional stored token.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self {
                token,
                status: "active".into(),
            },
            _ => Self {
                token: String::new(),
                status: "none".into(),
            },
        }
    }
}

/// Request storing a new streaming-account token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAdminTokenRequest {
    pub token: String,
}

/// Acknowledgement echoing the token read back from the store.
#[derive(Debug, Serialize, ToSchema)]
pub struct SetAdminTokenResponse {
    pub success: bool,
    pub token: String,
}

/// Request checking the admin password.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

/// Verdict of an admin password check.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyPasswordResponse {
    pub success: bool,
    pub message: String,
}

/// Query parameters accepted by the admin log listing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LogsQuery {
    /// Maximum number of entries to return (newest first).
    #[serde(default)]
    pub limit: Option<usize>,
    /// Restrict to one user's actions.
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}
