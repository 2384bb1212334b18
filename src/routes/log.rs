use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::{common::AckResponse, log::LogActionRequest},
    error::AppError,
    services::log_service,
    state::SharedState,
};

/// Route appending user actions to the log.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/log-action", post(log_action))
}

/// Append one user action to the log.
#[utoipa::path(
    post,
    path = "/api/log-action",
    tag = "logs",
    request_body = LogActionRequest,
    responses(
        (status = 200, description = "Action logged", body = AckResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn log_action(
    State(state): State<SharedState>,
    Json(payload): Json<LogActionRequest>,
) -> Result<Json<AckResponse>, AppError> {
    if payload.user_id.is_empty() || payload.action.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".into()));
    }

    log_service::log_action(&state, payload).await?;
    Ok(Json(AckResponse::ok()))
}
