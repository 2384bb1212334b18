//! DTO definitions for the current-song REST surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::common::Track, state::current_song::CurrentSong};

/// The now-playing triple shared with every participant.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentSongDto {
    pub song: Option<Track>,
    pub progress_ms: u64,
    pub is_playing: bool,
}

impl From<&CurrentSong> for CurrentSongDto {
    fn from(state: &CurrentSong) -> Self {
        Self {
            song: state.track().cloned().map(Into::into),
            progress_ms: state.progress_ms(),
            is_playing: state.is_playing(),
        }
    }
}

/// Response wrapping the register state with an `active`/`none` marker.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentSongResponse {
    #[serde(rename = "currentSong")]
    pub current_song: CurrentSongDto,
    pub status: String,
}

impl CurrentSongResponse {
    /// Build the response, deriving the status marker from track presence.
    pub fn from_state(state: &CurrentSong) -> Self {
        let status = if state.track().is_some() {
            "active"
        } else {
            "none"
        };
        Self {
            current_song: state.into(),
            status: status.into(),
        }
    }
}

/// Request to replace the now-playing record.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSongRequest {
    pub song: Track,
    /// Playback position to start from; defaults to the beginning.
    #[serde(default)]
    pub progress_ms: Option<u64>,
    /// Play state; defaults to playing.
    #[serde(default)]
    pub is_playing: Option<bool>,
}

/// Partial update of the now-playing record; ignored while no track is set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSongRequest {
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: Option<bool>,
}
