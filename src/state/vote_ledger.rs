//! Per-client vote ledger.
//!
//! Records which tracks a client has already voted on so the vote endpoint
//! can ignore repeats. Clients identify themselves with a self-asserted id
//! header, so this is a courtesy dedup for well-behaved UIs, not a security
//! boundary.

use crate::dto::leaderboard::VoteAction;

/// One remembered vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    /// Track the vote was cast on.
    pub track_id: String,
    /// Direction of the vote.
    pub action: VoteAction,
    /// RFC 3339 timestamp of when the vote was recorded.
    pub timestamp: String,
}

/// Record of the tracks one client has voted on. One entry per track;
/// recording a second vote for the same track is ignored.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    votes: Vec<VoteRecord>,
}

impl VoteLedger {
    /// Whether this client already voted on `track_id`.
    pub fn has_voted(&self, track_id: &str) -> bool {
        self.votes.iter().any(|vote| vote.track_id == track_id)
    }

    /// Remember a vote. Duplicate track ids are ignored; returns whether the
    /// vote was recorded.
    pub fn record_vote(&mut self, track_id: &str, action: VoteAction, timestamp: String) -> bool {
        if self.has_voted(track_id) {
            return false;
        }
        self.votes.push(VoteRecord {
            track_id: track_id.into(),
            action,
            timestamp,
        });
        true
    }

    /// Forget the vote on `track_id`, allowing the client to vote again.
    pub fn remove_vote(&mut self, track_id: &str) {
        self.votes.retain(|vote| vote.track_id != track_id);
    }

    /// Forget every vote.
    pub fn clear(&mut self) {
        self.votes.clear();
    }

    /// All remembered votes, oldest first.
    pub fn votes(&self) -> &[VoteRecord] {
        &self.votes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_then_duplicate_then_remove() {
        let mut ledger = VoteLedger::default();

        assert!(ledger.record_vote("t1", VoteAction::Increment, "now".into()));
        assert!(ledger.has_voted("t1"));

        // A second vote on the same track is ignored, even reversed.
        assert!(!ledger.record_vote("t1", VoteAction::Decrement, "later".into()));
        assert_eq!(ledger.votes().len(), 1);
        assert_eq!(ledger.votes()[0].action, VoteAction::Increment);

        ledger.remove_vote("t1");
        assert!(!ledger.has_voted("t1"));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut ledger = VoteLedger::default();
        ledger.record_vote("t1", VoteAction::Increment, "now".into());
        ledger.record_vote("t2", VoteAction::Decrement, "now".into());

        ledger.clear();
        assert!(ledger.votes().is_empty());
    }

    #[test]
    fn ledger_is_per_track_not_per_action() {
        let mut ledger = VoteLedger::default();
        ledger.record_vote("t1", VoteAction::Decrement, "now".into());
        assert!(!ledger.has_voted("t2"));
        assert!(ledger.record_vote("t2", VoteAction::Increment, "now".into()));
    }
}
