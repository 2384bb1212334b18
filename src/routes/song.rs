use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::song::{CurrentSongResponse, SetSongRequest, UpdateSongRequest},
    error::AppError,
    services::song_service,
    state::SharedState,
};

/// Routes operating on the current-song register.
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/api/currentSong",
        get(get_current_song)
            .post(set_current_song)
            .patch(update_current_song)
            .delete(reset_current_song),
    )
}

/// Return the now-playing state shared with every participant.
#[utoipa::path(
    get,
    path = "/api/currentSong",
    tag = "current-song",
    responses((status = 200, description = "Current song state", body = CurrentSongResponse))
)]
pub async fn get_current_song(State(state): State<SharedState>) -> Json<CurrentSongResponse> {
    Json(song_service::get(&state).await)
}

/// Replace the now-playing record.
#[utoipa::path(
    post,
    path = "/api/currentSong",
    tag = "current-song",
    request_body = SetSongRequest,
    responses((status = 200, description = "Current song replaced", body = CurrentSongResponse))
)]
pub async fn set_current_song(
    State(state): State<SharedState>,
    Json(payload): Json<SetSongRequest>,
) -> Result<Json<CurrentSongResponse>, AppError> {
    Ok(Json(song_service::set(&state, payload).await?))
}

/// Update playback progress and/or play state; a no-op while no track is set.
#[utoipa::path(
    patch,
    path = "/api/currentSong",
    tag = "current-song",
    request_body = UpdateSongRequest,
    responses((status = 200, description = "Current song updated", body = CurrentSongResponse))
)]
pub async fn update_current_song(
    State(state): State<SharedState>,
    Json(payload): Json<UpdateSongRequest>,
) -> Result<Json<CurrentSongResponse>, AppError> {
    Ok(Json(song_service::update(&state, payload).await?))
}

/// Clear the now-playing record.
#[utoipa::path(
    delete,
    path = "/api/currentSong",
    tag = "current-song",
    responses((status = 200, description = "Current song cleared", body = CurrentSongResponse))
)]
pub async fn reset_current_song(
    State(state): State<SharedState>,
) -> Result<Json<CurrentSongResponse>, AppError> {
    Ok(Json(song_service::reset(&state).await?))
}
