//! The current-song register: at most one "now playing" record shared with
//! every participant, plus playback progress and the play/pause flag.

use crate::dao::models::TrackEntity;

/// Now-playing state. Progress and play-state updates are no-ops until a
/// track has been set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentSong {
    track: Option<TrackEntity>,
    progress_ms: u64,
    is_playing: bool,
}

impl CurrentSong {
    /// Rebuild the register from its persisted fields.
    pub fn from_parts(track: Option<TrackEntity>, progress_ms: u64, is_playing: bool) -> Self {
        Self {
            track,
            progress_ms,
            is_playing,
        }
    }

    /// The track currently shown, if any.
    pub fn track(&self) -> Option<&TrackEntity> {
        self.track.as_ref()
    }

    /// Playback progress in milliseconds.
    pub fn progress_ms(&self) -> u64 {
        self.progress_ms
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Replace the register unconditionally with a new track.
    pub fn set(&mut self, track: TrackEntity, progress_ms: u64, is_playing: bool) {
        self.track = Some(track);
        self.progress_ms = progress_ms;
        self.is_playing = is_playing;
    }

    /// Update playback progress; a no-op while no track is set.
    pub fn update_progress(&mut self, progress_ms: u64) {
        if self.track.is_some() {
            self.progress_ms = progress_ms;
        }
    }

    /// Update the play/pause flag; a no-op while no track is set.
    pub fn update_playing(&mut self, is_playing: bool) {
        if self.track.is_some() {
            self.is_playing = is_playing;
        }
    }

    /// Clear back to the absent state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
