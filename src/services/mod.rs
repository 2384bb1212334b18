/// Streaming-account token register and admin password checks.
pub mod admin_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Genre vote counters.
pub mod genre_service;
/// Health check service.
pub mod health_service;
/// Leaderboard aggregation and voting logic.
pub mod leaderboard_service;
/// Append-only user action log.
pub mod log_service;
/// Session active flag and session type.
pub mod session_service;
/// Current-song register operations.
pub mod song_service;
/// Storage connection supervisor.
pub mod storage_supervisor;

pub(crate) mod record;
