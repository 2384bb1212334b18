//! DTO definitions for the action log endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::ActionLogEntity;

/// Request appending one action to the log.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LogActionRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub action: String,
    /// Free-form context captured alongside the action.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// One logged action as returned to administrators.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogEntryDto {
    pub timestamp: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub action: String,
    pub metadata: serde_json::Value,
}

impl From<ActionLogEntity> for LogEntryDto {
    fn from(entity: ActionLogEntity) -> Self {
        Self {
            timestamp: entity.timestamp,
            user_id: entity.user_id,
            action: entity.action,
            metadata: entity.metadata,
        }
    }
}

/// Response listing recent log entries, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogsResponse {
    pub logs: Vec<LogEntryDto>,
}
