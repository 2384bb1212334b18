use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::{
        admin::{
            AdminTokenResponse, LogsQuery, SetAdminTokenRequest, SetAdminTokenResponse,
            VerifyPasswordRequest, VerifyPasswordResponse,
        },
        common::AckResponse,
        log::LogsResponse,
    },
    error::AppError,
    services::{admin_service, log_service},
    state::SharedState,
};

/// Admin endpoints: the streaming-account token register, the password
/// check, and the action-log read-back.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/admin-token",
            get(get_admin_token)
                .post(set_admin_token)
                .delete(clear_admin_token),
        )
        .route("/api/admin/verify", post(verify_password))
        .route("/api/admin/logs", get(list_logs).delete(clear_logs))
}

/// Return the streaming-account token, empty when unset.
#[utoipa::path(
    get,
    path = "/api/admin-token",
    tag = "admin",
    responses((status = 200, description = "Stored token (empty when unset)", body = AdminTokenResponse))
)]
pub async fn get_admin_token(State(state): State<SharedState>) -> Json<AdminTokenResponse> {
    let token = admin_service::get_token(&state).await;
    Json(AdminTokenResponse::from_token(token))
}

/// Store a new streaming-account token.
#[utoipa::path(
    post,
    path = "/api/admin-token",
    tag = "admin",
    request_body = SetAdminTokenRequest,
    responses(
        (status = 200, description = "Token stored and read back", body = SetAdminTokenResponse),
        (status = 400, description = "No token provided")
    )
)]
pub async fn set_admin_token(
    State(state): State<SharedState>,
    Json(payload): Json<SetAdminTokenRequest>,
) -> Result<Json<SetAdminTokenResponse>, AppError> {
    if payload.token.is_empty() {
        return Err(AppError::BadRequest("No token provided".into()));
    }

    let stored = admin_service::set_token(&state, payload.token).await?;
    Ok(Json(SetAdminTokenResponse {
        success: true,
        token: stored,
    }))
}

/// Clear the streaming-account token.
#[utoipa::path(
    delete,
    path = "/api/admin-token",
    tag = "admin",
    responses((status = 200, description = "Token cleared", body = AckResponse))
)]
pub async fn clear_admin_token(
    State(state): State<SharedState>,
) -> Result<Json<AckResponse>, AppError> {
    admin_service::clear_token(&state).await?;
    Ok(Json(AckResponse::ok()))
}

/// Check a submitted admin password.
#[utoipa::path(
    post,
    path = "/api/admin/verify",
    tag = "admin",
    request_body = VerifyPasswordRequest,
    responses(
        (status = 200, description = "Verification verdict", body = VerifyPasswordResponse),
        (status = 400, description = "No password provided")
    )
)]
pub async fn verify_password(
    State(state): State<SharedState>,
    Json(payload): Json<VerifyPasswordRequest>,
) -> Result<Json<VerifyPasswordResponse>, AppError> {
    if payload.password.is_empty() {
        return Err(AppError::BadRequest("No password provided".into()));
    }

    Ok(Json(admin_service::verify_password(&state, &payload.password)))
}

/// List recent logged actions, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/logs",
    tag = "admin",
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of entries"),
        ("userId" = Option<String>, Query, description = "Restrict to one user")
    ),
    responses((status = 200, description = "Recent log entries", body = LogsResponse))
)]
pub async fn list_logs(
    State(state): State<SharedState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogsResponse>, AppError> {
    let entries =
        log_service::list_recent(&state, query.limit, query.user_id.as_deref()).await?;
    Ok(Json(LogsResponse {
        logs: entries.into_iter().map(Into::into).collect(),
    }))
}

/// Delete every logged action.
#[utoipa::path(
    delete,
    path = "/api/admin/logs",
    tag = "admin",
    responses((status = 200, description = "Logs cleared", body = AckResponse))
)]
pub async fn clear_logs(State(state): State<SharedState>) -> Result<Json<AckResponse>, AppError> {
    let removed = log_service::clear(&state).await?;
    Ok(Json(AckResponse::ok_with(format!(
        "Removed {removed} log keys"
    ))))
}
