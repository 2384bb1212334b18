use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{dao::models::TrackEntity, dto::validation::validate_track_id};

/// Track reference exchanged with clients: the streaming-service identifier
/// plus display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Validate for Track {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_track_id(&self.id) {
            errors.add("id", e);
        }
        if self.name.trim().is_empty() {
            errors.add("name", validator::ValidationError::new("empty_name"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl From<TrackEntity> for Track {
    fn from(entity: TrackEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            artists: entity.artists,
            album: entity.album,
            album_art_url: entity.album_art_url,
            duration_ms: entity.duration_ms,
            uri: entity.uri,
        }
    }
}

impl From<Track> for TrackEntity {
    fn from(track: Track) -> Self {
        Self {
            id: track.id,
            name: track.name,
            artists: track.artists,
            album: track.album,
            album_art_url: track.album_art_url,
            duration_ms: track.duration_ms,
            uri: track.uri,
        }
    }
}

/// Generic acknowledgement envelope used by the mutating endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct AckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AckResponse {
    /// Successful acknowledgement without a message.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Successful acknowledgement carrying a human-readable message.
    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}
