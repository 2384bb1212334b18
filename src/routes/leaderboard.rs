use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::Track,
        leaderboard::{AddVotesRequest, LeaderboardStatusResponse, RemoveTrackRequest, VoteRequest},
    },
    error::AppError,
    services::leaderboard_service,
    state::SharedState,
};

/// Header carrying the self-asserted client id used for vote deduplication.
const CLIENT_ID_HEADER: &str = "x-client-id";

/// Routes operating on the shared leaderboard.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/leaderboard", get(get_status).post(initialize))
        .route("/api/leaderboard/reset", post(reset))
        .route("/api/leaderboard/add", post(add_track))
        .route("/api/leaderboard/remove", post(remove_track))
        .route("/api/leaderboard/vote", post(vote))
        .route("/api/leaderboard/vote/add", post(add_votes))
}

/// Fetch the leaderboard, sorted by votes descending.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = "leaderboard",
    responses((status = 200, description = "Current leaderboard status", body = LeaderboardStatusResponse))
)]
pub async fn get_status(State(state): State<SharedState>) -> Json<LeaderboardStatusResponse> {
    Json(leaderboard_service::status(&state).await)
}

/// Mark the leaderboard initialized for the current session.
#[utoipa::path(
    post,
    path = "/api/leaderboard",
    tag = "leaderboard",
    responses((status = 200, description = "Leaderboard initialized", body = LeaderboardStatusResponse))
)]
pub async fn initialize(
    State(state): State<SharedState>,
) -> Result<Json<LeaderboardStatusResponse>, AppError> {
    Ok(Json(leaderboard_service::initialize(&state).await?))
}

/// Clear the leaderboard and the initialized flag.
#[utoipa::path(
    post,
    path = "/api/leaderboard/reset",
    tag = "leaderboard",
    responses((status = 200, description = "Leaderboard cleared", body = LeaderboardStatusResponse))
)]
pub async fn reset(
    State(state): State<SharedState>,
) -> Result<Json<LeaderboardStatusResponse>, AppError> {
    Ok(Json(leaderboard_service::reset(&state).await?))
}

/// Add a track to the leaderboard.
#[utoipa::path(
    post,
    path = "/api/leaderboard/add",
    tag = "leaderboard",
    request_body = Track,
    responses(
        (status = 200, description = "Track added", body = LeaderboardStatusResponse),
        (status = 400, description = "Invalid track payload")
    )
)]
pub async fn add_track(
    State(state): State<SharedState>,
    Json(track): Json<Track>,
) -> Result<Json<LeaderboardStatusResponse>, AppError> {
    track.validate()?;
    Ok(Json(leaderboard_service::add_track(&state, track).await?))
}

/// Remove a track from the leaderboard.
#[utoipa::path(
    post,
    path = "/api/leaderboard/remove",
    tag = "leaderboard",
    request_body = RemoveTrackRequest,
    responses((status = 200, description = "Track removed (or was absent)", body = LeaderboardStatusResponse))
)]
pub async fn remove_track(
    State(state): State<SharedState>,
    Json(payload): Json<RemoveTrackRequest>,
) -> Result<Json<LeaderboardStatusResponse>, AppError> {
    Ok(Json(leaderboard_service::remove(&state, &payload.id).await?))
}

/// Cast a single up or down vote on a track.
///
/// Clients may send an `X-Client-Id` header; repeat votes from the same
/// client on the same track are then ignored.
#[utoipa::path(
    post,
    path = "/api/leaderboard/vote",
    tag = "leaderboard",
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote applied", body = LeaderboardStatusResponse),
        (status = 400, description = "Invalid vote payload")
    )
)]
pub async fn vote(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<LeaderboardStatusResponse>, AppError> {
    payload.validate()?;

    let client_id = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    Ok(Json(
        leaderboard_service::vote(&state, &payload.id, payload.action, client_id).await?,
    ))
}

/// Add several votes to a track at once.
#[utoipa::path(
    post,
    path = "/api/leaderboard/vote/add",
    tag = "leaderboard",
    request_body = AddVotesRequest,
    responses(
        (status = 200, description = "Votes added", body = LeaderboardStatusResponse),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn add_votes(
    State(state): State<SharedState>,
    Json(payload): Json<AddVotesRequest>,
) -> Result<Json<LeaderboardStatusResponse>, AppError> {
    payload.validate()?;
    Ok(Json(
        leaderboard_service::add_votes(&state, &payload.track_id, payload.votes).await?,
    ))
}
