use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the co-playlist backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::leaderboard::get_status,
        crate::routes::leaderboard::initialize,
        crate::routes::leaderboard::reset,
        crate::routes::leaderboard::add_track,
        crate::routes::leaderboard::remove_track,
        crate::routes::leaderboard::vote,
        crate::routes::leaderboard::add_votes,
        crate::routes::song::get_current_song,
        crate::routes::song::set_current_song,
        crate::routes::song::update_current_song,
        crate::routes::song::reset_current_song,
        crate::routes::session::get_session,
        crate::routes::session::set_session,
        crate::routes::session::get_session_type,
        crate::routes::session::set_session_type,
        crate::routes::session::clear_session_type,
        crate::routes::admin::get_admin_token,
        crate::routes::admin::set_admin_token,
        crate::routes::admin::clear_admin_token,
        crate::routes::admin::verify_password,
        crate::routes::admin::list_logs,
        crate::routes::admin::clear_logs,
        crate::routes::genre::get_genre_tracker,
        crate::routes::genre::add_genre_votes,
        crate::routes::genre::clear_genre_tracker,
        crate::routes::log::log_action,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::Track,
            crate::dto::common::AckResponse,
            crate::dto::leaderboard::LeaderboardEntryDto,
            crate::dto::leaderboard::LeaderboardStatusResponse,
            crate::dto::leaderboard::VoteAction,
            crate::dto::leaderboard::VoteRequest,
            crate::dto::leaderboard::AddVotesRequest,
            crate::dto::leaderboard::RemoveTrackRequest,
            crate::dto::song::CurrentSongDto,
            crate::dto::song::CurrentSongResponse,
            crate::dto::song::SetSongRequest,
            crate::dto::song::UpdateSongRequest,
            crate::dto::session::SessionStatusResponse,
            crate::dto::session::SetSessionRequest,
            crate::dto::session::SetSessionResponse,
            crate::dto::session::SessionTypeResponse,
            crate::dto::session::SetSessionTypeRequest,
            crate::dto::admin::AdminTokenResponse,
            crate::dto::admin::SetAdminTokenRequest,
            crate::dto::admin::SetAdminTokenResponse,
            crate::dto::admin::VerifyPasswordRequest,
            crate::dto::admin::VerifyPasswordResponse,
            crate::dto::genre::GenreCountDto,
            crate::dto::genre::GenreTrackerResponse,
            crate::dto::genre::GenreTag,
            crate::dto::genre::TopTags,
            crate::dto::genre::AddGenreVotesRequest,
            crate::dto::log::LogActionRequest,
            crate::dto::log::LogEntryDto,
            crate::dto::log::LogsResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and store connectivity"),
        (name = "leaderboard", description = "Shared leaderboard and voting"),
        (name = "current-song", description = "Now-playing register"),
        (name = "session", description = "Session flags"),
        (name = "admin", description = "Admin token, password check, and logs"),
        (name = "genre", description = "Genre vote counters"),
        (name = "logs", description = "User action logging"),
    )
)]
pub struct ApiDoc;
