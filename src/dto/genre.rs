//! DTO definitions for the genre tracker REST surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::GenreCountEntity;

/// One genre counter as sent to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreCountDto {
    pub genre: String,
    pub votes: i64,
}

impl From<GenreCountEntity> for GenreCountDto {
    fn from(entity: GenreCountEntity) -> Self {
        Self {
            genre: entity.genre,
            votes: entity.votes,
        }
    }
}

/// Response listing every genre counter.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreTrackerResponse {
    pub success: bool,
    #[serde(rename = "genreTracker")]
    pub genre_tracker: Vec<GenreCountDto>,
}

/// One tag as reported by the track metadata service.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenreTag {
    pub name: String,
}

/// Tag list wrapper mirroring the metadata service's response shape.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TopTags {
    #[serde(default)]
    pub tag: Vec<GenreTag>,
}

/// Request accumulating genre votes from a track's tag list.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddGenreVotesRequest {
    pub toptags: TopTags,
}
