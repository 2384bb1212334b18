use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::{
        common::AckResponse,
        genre::{AddGenreVotesRequest, GenreTrackerResponse},
    },
    error::AppError,
    services::genre_service,
    state::SharedState,
};

/// Routes operating on the genre vote counters.
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/api/genreTracker",
        get(get_genre_tracker)
            .post(add_genre_votes)
            .delete(clear_genre_tracker),
    )
}

/// Return every genre counter, sorted by votes descending.
#[utoipa::path(
    get,
    path = "/api/genreTracker",
    tag = "genre",
    responses((status = 200, description = "Genre counters", body = GenreTrackerResponse))
)]
pub async fn get_genre_tracker(State(state): State<SharedState>) -> Json<GenreTrackerResponse> {
    let genre_tracker = genre_service::get(&state).await;
    Json(GenreTrackerResponse {
        success: true,
        genre_tracker,
    })
}

/// Accumulate genre votes from a track's tag list.
#[utoipa::path(
    post,
    path = "/api/genreTracker",
    tag = "genre",
    request_body = AddGenreVotesRequest,
    responses(
        (status = 200, description = "Votes added", body = AckResponse),
        (status = 400, description = "No tags provided")
    )
)]
pub async fn add_genre_votes(
    State(state): State<SharedState>,
    Json(payload): Json<AddGenreVotesRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let tags: Vec<String> = payload
        .toptags
        .tag
        .into_iter()
        .map(|tag| tag.name)
        .filter(|name| !name.trim().is_empty())
        .collect();

    if tags.is_empty() {
        return Err(AppError::BadRequest("No tags provided".into()));
    }

    genre_service::add_votes_from_tags(&state, tags).await?;
    Ok(Json(AckResponse::ok_with("Votes added successfully")))
}

/// Reset every genre counter.
#[utoipa::path(
    delete,
    path = "/api/genreTracker",
    tag = "genre",
    responses((status = 200, description = "Genre tracker cleared", body = AckResponse))
)]
pub async fn clear_genre_tracker(
    State(state): State<SharedState>,
) -> Result<Json<AckResponse>, AppError> {
    genre_service::clear(&state).await?;
    Ok(Json(AckResponse::ok_with(
        "Genre tracker cleared successfully",
    )))
}
