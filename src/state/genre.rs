//! Genre vote counters accumulated from track tag metadata.

use indexmap::IndexMap;

use crate::dao::models::GenreCountEntity;

/// Per-genre vote tallies. Keyed by tag name; insertion order is kept until
/// [`GenreTracker::sort`] reorders by votes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTracker {
    counts: IndexMap<String, i64>,
}

impl GenreTracker {
    /// Rebuild the tracker from its persisted representation.
    pub fn from_entities(entities: Vec<GenreCountEntity>) -> Self {
        let mut counts = IndexMap::new();
        for entity in entities {
            *counts.entry(entity.genre).or_insert(0) += entity.votes;
        }
        Self { counts }
    }

    /// Convert the counters into their persisted representation.
    pub fn to_entities(&self) -> Vec<GenreCountEntity> {
        self.counts
            .iter()
            .map(|(genre, votes)| GenreCountEntity {
                genre: genre.clone(),
                votes: *votes,
            })
            .collect()
    }

    /// Count one vote per tag; unseen tags start at one.
    pub fn add_votes_from_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            *self.counts.entry(tag.into()).or_insert(0) += 1;
        }
    }

    /// Reorder genres by votes descending; ties keep their prior order.
    pub fn sort(&mut self) {
        self.counts.sort_by(|_, a, _, b| b.cmp(a));
    }

    /// Number of tracked genres.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no genre has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_accumulate_across_tracks() {
        let mut tracker = GenreTracker::default();
        tracker.add_votes_from_tags(["rock", "indie"]);
        tracker.add_votes_from_tags(["rock"]);

        let entities = tracker.to_entities();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].genre, "rock");
        assert_eq!(entities[0].votes, 2);
        assert_eq!(entities[1].votes, 1);
    }

    #[test]
    fn sort_orders_by_votes_descending() {
        let mut tracker = GenreTracker::default();
        tracker.add_votes_from_tags(["pop"]);
        tracker.add_votes_from_tags(["rock", "rock", "pop", "jazz"]);

        tracker.sort();

        let order: Vec<String> = tracker
            .to_entities()
            .into_iter()
            .map(|entity| entity.genre)
            .collect();
        assert_eq!(order, vec!["pop", "rock", "jazz"]);
    }

    #[test]
    fn entity_round_trip_merges_duplicate_genres() {
        let entities = vec![
            GenreCountEntity {
                genre: "rock".into(),
                votes: 2,
            },
            GenreCountEntity {
                genre: "rock".into(),
                votes: 1,
            },
        ];

        let tracker = GenreTracker::from_entities(entities);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.to_entities()[0].votes, 3);
    }
}
