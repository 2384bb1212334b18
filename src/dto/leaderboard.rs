//! DTO definitions for the leaderboard REST surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::{common::Track, validation::validate_track_id},
    state::leaderboard::{Leaderboard, LeaderboardEntry},
};

/// One leaderboard row as sent to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub track: Track,
    pub votes: i64,
}

impl From<&LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            track: entry.track.clone().into(),
            votes: entry.votes,
        }
    }
}

/// Snapshot of the leaderboard returned by every leaderboard endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardStatusResponse {
    pub entries: Vec<LeaderboardEntryDto>,
    pub initialized: bool,
}

impl From<&Leaderboard> for LeaderboardStatusResponse {
    fn from(board: &Leaderboard) -> Self {
        Self {
            entries: board.entries().iter().map(Into::into).collect(),
            initialized: board.is_initialized(),
        }
    }
}

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    /// One vote up.
    Increment,
    /// One vote down.
    Decrement,
}

/// Request to cast a single vote on a track.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    pub id: String,
    pub action: VoteAction,
}

impl Validate for VoteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_track_id(&self.id) {
            errors.add("id", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Request to add several votes to a track at once.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddVotesRequest {
    #[serde(rename = "trackId")]
    pub track_id: String,
    pub votes: i64,
}

impl Validate for AddVotesRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_track_id(&self.track_id) {
            errors.add("trackId", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Request to remove a track from the leaderboard.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RemoveTrackRequest {
    pub id: String,
}
