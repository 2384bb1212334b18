use serde::{Deserialize, Serialize};

/// Key holding the serialized leaderboard entry list.
pub const LEADERBOARD_KEY: &str = "spotify_leaderboard";
/// Key holding the leaderboard initialized flag.
pub const LEADERBOARD_STATUS_KEY: &str = "spotify_leaderboard_status";
/// Key holding the track currently shown as "now playing".
pub const CURRENT_SONG_KEY: &str = "current_song";
/// Key holding the playback progress of the current song in milliseconds.
pub const SONG_PROGRESS_KEY: &str = "song_progress";
/// Key holding the play/pause flag of the current song.
pub const IS_PLAYING_KEY: &str = "is_playing";
/// Key holding the session active flag.
pub const SESSION_STATUS_KEY: &str = "session_status";
/// Key holding the session type label.
pub const SESSION_TYPE_KEY: &str = "session_type";
/// Key holding the streaming-account bearer token used for playback control.
pub const ADMIN_TOKEN_KEY: &str = "admin_token";
/// Key holding the serialized genre vote counters.
pub const GENRE_TRACKER_KEY: &str = "genre_tracker";
/// Prefix shared by every action-log record and index list.
pub const ACTION_LOG_PREFIX: &str = "user_action:";

/// Track reference persisted inside leaderboard entries and the current-song
/// record: an opaque streaming-service identifier plus display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackEntity {
    /// Identifier assigned by the streaming service.
    pub id: String,
    /// Display title.
    pub name: String,
    /// Artist display names.
    #[serde(default)]
    pub artists: Vec<String>,
    /// Album title, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Album artwork URL, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art_url: Option<String>,
    /// Track length in milliseconds, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Streaming-service URI used to queue the track for playback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// One leaderboard row as persisted under [`LEADERBOARD_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntryEntity {
    /// The candidate track.
    pub track: TrackEntity,
    /// Vote tally; may go negative.
    pub votes: i64,
}

/// Snapshot persisted for the current-song register under [`CURRENT_SONG_KEY`].
///
/// Progress and play state live under their own keys so the admin UI can
/// update them without rewriting the track payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentSongEntity {
    /// Now-playing track, or `None` when nothing has been set.
    pub song: Option<TrackEntity>,
}

/// Per-genre vote counter persisted under [`GENRE_TRACKER_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreCountEntity {
    /// Genre tag name as reported by the metadata service.
    pub genre: String,
    /// Accumulated vote count for the genre.
    pub votes: i64,
}

/// Action-log record stored under `user_action:<entry id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLogEntity {
    /// RFC 3339 timestamp of when the action was logged.
    pub timestamp: String,
    /// Self-asserted identifier of the acting user.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Action label (e.g. `vote`, `search`).
    pub action: String,
    /// Free-form context captured alongside the action.
    #[serde(default)]
    pub metadata: serde_json::Value,
}
