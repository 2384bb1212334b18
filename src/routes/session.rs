use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::{
        common::AckResponse,
        session::{
            SessionStatusResponse, SessionTypeResponse, SetSessionRequest, SetSessionResponse,
            SetSessionTypeRequest,
        },
        validation::validate_session_type,
    },
    error::AppError,
    services::session_service,
    state::SharedState,
};

/// Routes operating on the session flags.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/session", get(get_session).post(set_session))
        .route(
            "/api/session/type",
            get(get_session_type)
                .post(set_session_type)
                .delete(clear_session_type),
        )
}

/// Report whether the listening session is open.
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "session",
    responses((status = 200, description = "Session status", body = SessionStatusResponse))
)]
pub async fn get_session(State(state): State<SharedState>) -> Json<SessionStatusResponse> {
    let active = session_service::is_active(&state).await;
    Json(SessionStatusResponse::from_active(active))
}

/// Open or close the listening session.
#[utoipa::path(
    post,
    path = "/api/session",
    tag = "session",
    request_body = SetSessionRequest,
    responses(
        (status = 200, description = "Session toggled", body = SetSessionResponse),
        (status = 400, description = "No session value provided")
    )
)]
pub async fn set_session(
    State(state): State<SharedState>,
    Json(payload): Json<SetSessionRequest>,
) -> Result<Json<SetSessionResponse>, AppError> {
    if payload.session.trim().is_empty() {
        return Err(AppError::BadRequest("No session provided".into()));
    }

    session_service::set_active(&state, payload.session == "active").await?;
    let active = session_service::is_active(&state).await;

    Ok(Json(SetSessionResponse {
        success: true,
        session: if active { "active" } else { "inactive" }.into(),
    }))
}

/// Return the session type label, `none` when unset.
#[utoipa::path(
    get,
    path = "/api/session/type",
    tag = "session",
    responses((status = 200, description = "Session type", body = SessionTypeResponse))
)]
pub async fn get_session_type(State(state): State<SharedState>) -> Json<SessionTypeResponse> {
    let session_type = session_service::get_type(&state).await;
    Json(SessionTypeResponse {
        session_type: session_type.unwrap_or_else(|| "none".into()),
    })
}

/// Set the session type label.
#[utoipa::path(
    post,
    path = "/api/session/type",
    tag = "session",
    request_body = SetSessionTypeRequest,
    responses(
        (status = 200, description = "Session type updated", body = AckResponse),
        (status = 400, description = "Invalid session type")
    )
)]
pub async fn set_session_type(
    State(state): State<SharedState>,
    Json(payload): Json<SetSessionTypeRequest>,
) -> Result<Json<AckResponse>, AppError> {
    validate_session_type(&payload.session_type)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    session_service::set_type(&state, &payload.session_type).await?;
    Ok(Json(AckResponse::ok_with("Session type updated")))
}

/// Clear the session type label.
#[utoipa::path(
    delete,
    path = "/api/session/type",
    tag = "session",
    responses((status = 200, description = "Session type cleared", body = AckResponse))
)]
pub async fn clear_session_type(
    State(state): State<SharedState>,
) -> Result<Json<AckResponse>, AppError> {
    session_service::clear_type(&state).await?;
    Ok(Json(AckResponse::ok_with("Session type cleared successfully")))
}
