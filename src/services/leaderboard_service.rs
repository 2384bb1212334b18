//! Leaderboard operations.
//!
//! Every mutation runs as a load → mutate → persist cycle under the
//! leaderboard gate, so concurrent votes serialize behind a single writer
//! instead of losing updates to interleaved read-modify-writes. Sorting is
//! part of the service contract: mutations persist a sorted board, and reads
//! return one, while the core structure itself never resorts on its own.

use std::sync::Arc;

use tracing::warn;

use crate::{
    dao::{
        kv_store::KvStore,
        models::{LEADERBOARD_KEY, LEADERBOARD_STATUS_KEY, LeaderboardEntryEntity},
    },
    dto::{
        common::Track,
        leaderboard::{LeaderboardStatusResponse, VoteAction},
        now_rfc3339,
    },
    error::ServiceError,
    state::{SharedState, leaderboard::Leaderboard},
};

/// Current leaderboard status, sorted by votes descending.
///
/// Reads degrade gracefully: without a reachable store the response is an
/// empty, uninitialized board.
pub async fn status(state: &SharedState) -> LeaderboardStatusResponse {
    let Some(store) = state.kv_store().await else {
        warn!("leaderboard read while storage unavailable; returning empty status");
        return (&Leaderboard::default()).into();
    };

    let mut board = match load(&store).await {
        Ok(board) => board,
        Err(err) => {
            warn!(error = %err, "failed to load leaderboard; returning empty status");
            Leaderboard::default()
        }
    };
    board.sort();
    (&board).into()
}

/// Mark the leaderboard initialized, keeping any existing entries.
pub async fn initialize(state: &SharedState) -> Result<LeaderboardStatusResponse, ServiceError> {
    mutate(state, |board| board.initialize()).await
}

/// Clear every entry and the initialized flag. Per-client vote ledgers are
/// dropped with the entries so a new round starts from a clean slate.
pub async fn reset(state: &SharedState) -> Result<LeaderboardStatusResponse, ServiceError> {
    let response = mutate(state, |board| board.reset()).await?;
    state.ledgers().clear();
    Ok(response)
}

/// Add a track to the leaderboard. Duplicate adds follow the configured
/// policy (count as a vote, or no-op).
pub async fn add_track(
    state: &SharedState,
    track: Track,
) -> Result<LeaderboardStatusResponse, ServiceError> {
    let increment = state.config().increment_on_duplicate_add();
    mutate(state, move |board| board.add(track.into(), increment)).await
}

/// Remove a track from the leaderboard; absent ids are a no-op. The track is
/// also forgotten by every vote ledger so it can be voted on again if
/// re-added.
pub async fn remove(
    state: &SharedState,
    track_id: &str,
) -> Result<LeaderboardStatusResponse, ServiceError> {
    let response = mutate(state, |board| board.remove(track_id)).await?;
    for mut ledger in state.ledgers().iter_mut() {
        ledger.remove_vote(track_id);
    }
    Ok(response)
}

/// Cast a single vote. When the client identifies itself, a repeat vote on
/// the same track is ignored and the current status returned unchanged.
pub async fn vote(
    state: &SharedState,
    track_id: &str,
    action: VoteAction,
    client_id: Option<String>,
) -> Result<LeaderboardStatusResponse, ServiceError> {
    let store = state.require_kv_store().await?;
    let _gate = state.leaderboard_gate().lock().await;

    if let Some(client) = client_id.as_deref() {
        let already_voted = state
            .ledgers()
            .get(client)
            .is_some_and(|ledger| ledger.has_voted(track_id));
        if already_voted {
            let mut board = load(&store).await?;
            board.sort();
            return Ok((&board).into());
        }
    }

    let mut board = load(&store).await?;
    match action {
        VoteAction::Increment => board.increment_votes(track_id),
        VoteAction::Decrement => board.decrement_votes(track_id),
    }
    board.sort();
    persist(&store, &board).await?;

    // A vote on an id that is not on the board is a no-op; remembering it
    // would block the client from voting once the track is actually added.
    let on_board = board
        .entries()
        .iter()
        .any(|entry| entry.track.id == track_id);
    if let Some(client) = client_id {
        if on_board {
            state
                .ledgers()
                .entry(client)
                .or_default()
                .record_vote(track_id, action, now_rfc3339());
        }
    }

    Ok((&board).into())
}

/// Add several votes to a track at once; absent ids are a no-op.
pub async fn add_votes(
    state: &SharedState,
    track_id: &str,
    votes: i64,
) -> Result<LeaderboardStatusResponse, ServiceError> {
    mutate(state, |board| board.add_votes(track_id, votes)).await
}

/// Run one load → mutate → sort → persist cycle under the leaderboard gate.
async fn mutate<F>(state: &SharedState, op: F) -> Result<LeaderboardStatusResponse, ServiceError>
where
    F: FnOnce(&mut Leaderboard),
{
    let store = state.require_kv_store().await?;
    let _gate = state.leaderboard_gate().lock().await;

    let mut board = load(&store).await?;
    op(&mut board);
    board.sort();
    persist(&store, &board).await?;
    Ok((&board).into())
}

async fn load(store: &Arc<dyn KvStore>) -> Result<Leaderboard, ServiceError> {
    let entries: Vec<LeaderboardEntryEntity> = super::record::decode_or_default(
        LEADERBOARD_KEY,
        store.get(LEADERBOARD_KEY).await?,
    );
    let initialized: bool = super::record::decode_or_default(
        LEADERBOARD_STATUS_KEY,
        store.get(LEADERBOARD_STATUS_KEY).await?,
    );
    Ok(Leaderboard::from_parts(entries, initialized))
}

async fn persist(store: &Arc<dyn KvStore>, board: &Leaderboard) -> Result<(), ServiceError> {
    let entries = super::record::encode(LEADERBOARD_KEY, &board.to_entities())?;
    let initialized = super::record::encode(LEADERBOARD_STATUS_KEY, &board.is_initialized())?;

    store.set(LEADERBOARD_KEY, entries).await?;
    store.set(LEADERBOARD_STATUS_KEY, initialized).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig, dao::kv_store::memory::MemoryKvStore, state::AppState,
    };

    async fn test_state() -> SharedState {
        let state = AppState::new(AppConfig::default());
        state.install_kv_store(Arc::new(MemoryKvStore::new())).await;
        state
    }

    fn test_track(id: &str) -> Track {
        Track {
            id: id.into(),
            name: format!("track {id}"),
            artists: vec!["artist".into()],
            album: None,
            album_art_url: None,
            duration_ms: Some(180_000),
            uri: Some(format!("spotify:track:{id}")),
        }
    }

    #[tokio::test]
    async fn add_vote_remove_round_trips_through_store() {
        let state = test_state().await;

        let status = add_track(&state, test_track("a1")).await.unwrap();
        assert_eq!(status.entries.len(), 1);
        assert_eq!(status.entries[0].votes, 1);

        let status = vote(&state, "a1", VoteAction::Increment, None).await.unwrap();
        assert_eq!(status.entries[0].votes, 2);

        // A fresh read goes back through the persisted record.
        let status = super::status(&state).await;
        assert_eq!(status.entries[0].votes, 2);
        assert_eq!(status.entries[0].track.uri.as_deref(), Some("spotify:track:a1"));

        let status = remove(&state, "a1").await.unwrap();
        assert!(status.entries.is_empty());
    }

    #[tokio::test]
    async fn duplicate_add_counts_as_a_vote() {
        let state = test_state().await;
        add_track(&state, test_track("a1")).await.unwrap();
        let status = add_track(&state, test_track("a1")).await.unwrap();

        assert_eq!(status.entries.len(), 1);
        assert_eq!(status.entries[0].votes, 2);
    }

    #[tokio::test]
    async fn responses_are_sorted_with_stable_ties() {
        let state = test_state().await;
        for id in ["a", "b", "c"] {
            add_track(&state, test_track(id)).await.unwrap();
        }
        add_votes(&state, "c", 2).await.unwrap();
        let status = add_votes(&state, "b", 2).await.unwrap();

        let order: Vec<&str> = status
            .entries
            .iter()
            .map(|entry| entry.track.id.as_str())
            .collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn identified_clients_cannot_vote_twice_on_a_track() {
        let state = test_state().await;
        add_track(&state, test_track("t1")).await.unwrap();

        let client = Some("browser-1".to_owned());
        let status = vote(&state, "t1", VoteAction::Increment, client.clone())
            .await
            .unwrap();
        assert_eq!(status.entries[0].votes, 2);

        // Same client again: ignored, even with the opposite action.
        let status = vote(&state, "t1", VoteAction::Decrement, client)
            .await
            .unwrap();
        assert_eq!(status.entries[0].votes, 2);

        // A different client still counts.
        let status = vote(&state, "t1", VoteAction::Increment, Some("browser-2".into()))
            .await
            .unwrap();
        assert_eq!(status.entries[0].votes, 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_votes_are_all_counted() {
        let state = test_state().await;
        add_track(&state, test_track("t1")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                vote(&state, "t1", VoteAction::Increment, None).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // 1 from the add plus 50 gated read-modify-write cycles.
        let status = super::status(&state).await;
        assert_eq!(status.entries[0].votes, 51);
    }

    #[tokio::test]
    async fn vote_on_an_absent_track_does_not_consume_the_ledger() {
        let state = test_state().await;
        let client = Some("browser-1".to_owned());

        let status = vote(&state, "t1", VoteAction::Increment, client.clone())
            .await
            .unwrap();
        assert!(status.entries.is_empty());

        add_track(&state, test_track("t1")).await.unwrap();
        let status = vote(&state, "t1", VoteAction::Increment, client).await.unwrap();
        assert_eq!(status.entries[0].votes, 2);
    }

    #[tokio::test]
    async fn removing_a_track_lets_clients_vote_on_it_again() {
        let state = test_state().await;
        add_track(&state, test_track("t1")).await.unwrap();
        let client = Some("browser-1".to_owned());
        vote(&state, "t1", VoteAction::Increment, client.clone())
            .await
            .unwrap();

        remove(&state, "t1").await.unwrap();
        add_track(&state, test_track("t1")).await.unwrap();

        let status = vote(&state, "t1", VoteAction::Increment, client).await.unwrap();
        assert_eq!(status.entries[0].votes, 2);
    }

    #[tokio::test]
    async fn reset_clears_entries_flag_and_ledgers() {
        let state = test_state().await;
        add_track(&state, test_track("t1")).await.unwrap();
        initialize(&state).await.unwrap();
        vote(&state, "t1", VoteAction::Increment, Some("browser-1".into()))
            .await
            .unwrap();

        let status = reset(&state).await.unwrap();
        assert!(status.entries.is_empty());
        assert!(!status.initialized);
        assert!(state.ledgers().is_empty());

        let status = super::status(&state).await;
        assert!(status.entries.is_empty());
        assert!(!status.initialized);
    }

    #[tokio::test]
    async fn initialize_keeps_existing_entries() {
        let state = test_state().await;
        add_track(&state, test_track("t1")).await.unwrap();

        let status = initialize(&state).await.unwrap();
        assert!(status.initialized);
        assert_eq!(status.entries.len(), 1);
    }

    #[tokio::test]
    async fn mutations_fail_while_degraded() {
        let state = AppState::new(AppConfig::default());

        let result = add_track(&state, test_track("t1")).await;
        assert!(matches!(result, Err(ServiceError::Degraded)));

        // Reads degrade to an empty board instead of failing.
        let status = super::status(&state).await;
        assert!(status.entries.is_empty());
    }
}
