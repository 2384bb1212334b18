use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod admin;
pub mod common;
pub mod genre;
pub mod health;
pub mod leaderboard;
pub mod log;
pub mod session;
pub mod song;
pub mod validation;

/// Current wall-clock time as an RFC 3339 string.
pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
