//! The shared leaderboard: candidate tracks and their vote tallies.
//!
//! This is a pure in-memory structure; the service layer loads it from the
//! key-value store, mutates it under the leaderboard gate, and writes it
//! back. At most one entry exists per track identifier. Votes are allowed to
//! go negative. Entries keep insertion order until [`Leaderboard::sort`] is
//! called explicitly; mutations never resort on their own.

use crate::dao::models::{LeaderboardEntryEntity, TrackEntity};

/// One candidate track and its tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// The candidate track.
    pub track: TrackEntity,
    /// Vote tally; unbounded in both directions.
    pub votes: i64,
}

/// Ranked collection of candidate tracks plus the session's initialized flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    initialized: bool,
}

impl Leaderboard {
    /// Rebuild a leaderboard from its persisted representation.
    pub fn from_parts(entries: Vec<LeaderboardEntryEntity>, initialized: bool) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entity| LeaderboardEntry {
                    track: entity.track,
                    votes: entity.votes,
                })
                .collect(),
            initialized,
        }
    }

    /// Convert the entry list into its persisted representation.
    pub fn to_entities(&self) -> Vec<LeaderboardEntryEntity> {
        self.entries
            .iter()
            .map(|entry| LeaderboardEntryEntity {
                track: entry.track.clone(),
                votes: entry.votes,
            })
            .collect()
    }

    /// Current entries, in their current order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Whether the session's leaderboard has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Add a track. A new track starts at one vote; adding a track that is
    /// already listed counts as one more vote for it when
    /// `increment_on_duplicate` is set, and is a no-op otherwise.
    pub fn add(&mut self, track: TrackEntity, increment_on_duplicate: bool) {
        if let Some(existing) = self.find_mut(&track.id) {
            if increment_on_duplicate {
                existing.votes += 1;
            }
        } else {
            self.entries.push(LeaderboardEntry { track, votes: 1 });
        }
    }

    /// Remove the entry for `track_id`; absent ids are a no-op.
    pub fn remove(&mut self, track_id: &str) {
        self.entries.retain(|entry| entry.track.id != track_id);
    }

    /// Add one vote to `track_id`; absent ids are a no-op.
    pub fn increment_votes(&mut self, track_id: &str) {
        if let Some(entry) = self.find_mut(track_id) {
            entry.votes += 1;
        }
    }

    /// Take one vote from `track_id`; absent ids are a no-op.
    pub fn decrement_votes(&mut self, track_id: &str) {
        if let Some(entry) = self.find_mut(track_id) {
            entry.votes -= 1;
        }
    }

    /// Add `votes` (possibly negative) to `track_id`; absent ids are a no-op.
    pub fn add_votes(&mut self, track_id: &str, votes: i64) {
        if let Some(entry) = self.find_mut(track_id) {
            entry.votes += votes;
        }
    }

    /// Reorder entries by votes descending. Ties keep their prior relative
    /// order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.votes.cmp(&a.votes));
    }

    /// Mark the leaderboard initialized. Existing entries are kept.
    pub fn initialize(&mut self) {
        self.initialized = true;
    }

    /// Drop every entry and clear the initialized flag.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.initialized = false;
    }

    fn find_mut(&mut self, track_id: &str) -> Option<&mut LeaderboardEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.track.id == track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> TrackEntity {
        TrackEntity {
            id: id.into(),
            name: format!("track {id}"),
            artists: vec!["artist".into()],
            album: None,
            album_art_url: None,
            duration_ms: None,
            uri: None,
        }
    }

    #[test]
    fn add_starts_at_one_vote() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);

        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].track.id, "a1");
        assert_eq!(board.entries()[0].votes, 1);
    }

    #[test]
    fn add_existing_track_increments_instead_of_duplicating() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);
        board.add(track("a1"), true);

        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].votes, 2);
    }

    #[test]
    fn add_existing_track_is_noop_when_increment_disabled() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), false);
        board.add(track("a1"), false);

        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].votes, 1);
    }

    #[test]
    fn entry_count_never_exceeds_distinct_ids() {
        let mut board = Leaderboard::default();
        for _ in 0..5 {
            board.add(track("a"), true);
            board.add(track("b"), true);
            board.increment_votes("a");
            board.decrement_votes("c");
        }

        assert_eq!(board.entries().len(), 2);
    }

    #[test]
    fn vote_scenario_allows_reaching_zero() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);
        board.increment_votes("a1");
        assert_eq!(board.entries()[0].votes, 2);

        board.decrement_votes("a1");
        board.decrement_votes("a1");
        assert_eq!(board.entries()[0].votes, 0);

        board.remove("a1");
        assert!(board.entries().is_empty());
    }

    #[test]
    fn votes_may_go_negative() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);
        board.decrement_votes("a1");
        board.decrement_votes("a1");

        assert_eq!(board.entries()[0].votes, -1);
    }

    #[test]
    fn votes_on_absent_track_are_noops() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);
        let before = board.clone();

        board.increment_votes("ghost");
        board.decrement_votes("ghost");
        board.add_votes("ghost", 7);
        board.remove("ghost");

        assert_eq!(board, before);
    }

    #[test]
    fn add_votes_applies_bulk_delta() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);
        board.add_votes("a1", 4);
        assert_eq!(board.entries()[0].votes, 5);

        board.add_votes("a1", -3);
        assert_eq!(board.entries()[0].votes, 2);
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let mut board = Leaderboard::default();
        for id in ["a", "b", "c", "d"] {
            board.add(track(id), true);
        }
        board.add_votes("b", 2);
        board.add_votes("d", 2);

        board.sort();

        let order: Vec<&str> = board
            .entries()
            .iter()
            .map(|entry| entry.track.id.as_str())
            .collect();
        // b and d tie at 3 and keep their relative order, as do a and c at 1.
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn mutations_do_not_resort() {
        let mut board = Leaderboard::default();
        board.add(track("a"), true);
        board.add(track("b"), true);
        board.add_votes("b", 5);

        let order: Vec<&str> = board
            .entries()
            .iter()
            .map(|entry| entry.track.id.as_str())
            .collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn initialize_keeps_entries_and_reset_clears_everything() {
        let mut board = Leaderboard::default();
        board.add(track("a1"), true);
        board.initialize();

        assert!(board.is_initialized());
        assert_eq!(board.entries().len(), 1);

        board.reset();
        assert!(!board.is_initialized());
        assert!(board.entries().is_empty());
    }

    #[test]
    fn entity_round_trip_preserves_entries_and_votes() {
        let mut board = Leaderboard::default();
        board.add(track("a"), true);
        board.add(track("b"), true);
        board.add_votes("b", 3);
        board.initialize();

        let rebuilt = Leaderboard::from_parts(board.to_entities(), board.is_initialized());
        assert_eq!(rebuilt, board);
    }
}
