//! Genre vote counters accumulated from track tag metadata.

use std::sync::Arc;

use tracing::warn;

use crate::{
    dao::{
        kv_store::KvStore,
        models::{GENRE_TRACKER_KEY, GenreCountEntity},
    },
    dto::genre::GenreCountDto,
    error::ServiceError,
    state::{SharedState, genre::GenreTracker},
};

/// Current genre counters. Reads degrade to an empty list when storage is
/// unreachable.
pub async fn get(state: &SharedState) -> Vec<GenreCountDto> {
    let Some(store) = state.kv_store().await else {
        warn!("genre tracker read while storage unavailable; returning empty list");
        return Vec::new();
    };

    match load(&store).await {
        Ok(tracker) => tracker.to_entities().into_iter().map(Into::into).collect(),
        Err(err) => {
            warn!(error = %err, "failed to load genre tracker; returning empty list");
            Vec::new()
        }
    }
}

/// Count one vote per tag and persist the counters sorted by votes
/// descending.
pub async fn add_votes_from_tags(
    state: &SharedState,
    tags: Vec<String>,
) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;
    let _gate = state.genre_gate().lock().await;

    let mut tracker = load(&store).await?;
    tracker.add_votes_from_tags(tags);
    tracker.sort();
    persist(&store, &tracker).await
}

/// Reset every genre counter.
pub async fn clear(state: &SharedState) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;
    let _gate = state.genre_gate().lock().await;
    persist(&store, &GenreTracker::default()).await
}

async fn load(store: &Arc<dyn KvStore>) -> Result<GenreTracker, ServiceError> {
    let entities: Vec<GenreCountEntity> = super::record::decode_or_default(
        GENRE_TRACKER_KEY,
        store.get(GENRE_TRACKER_KEY).await?,
    );
    Ok(GenreTracker::from_entities(entities))
}

async fn persist(store: &Arc<dyn KvStore>, tracker: &GenreTracker) -> Result<(), ServiceError> {
    let raw = super::record::encode(GENRE_TRACKER_KEY, &tracker.to_entities())?;
    store.set(GENRE_TRACKER_KEY, raw).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, dao::kv_store::memory::MemoryKvStore, state::AppState};

    async fn test_state() -> SharedState {
        let state = AppState::new(AppConfig::default());
        state.install_kv_store(Arc::new(MemoryKvStore::new())).await;
        state
    }

    #[tokio::test]
    async fn counters_accumulate_and_stay_sorted() {
        let state = test_state().await;

        add_votes_from_tags(&state, vec!["rock".into(), "indie".into()])
            .await
            .unwrap();
        add_votes_from_tags(&state, vec!["indie".into()]).await.unwrap();

        let counts = get(&state).await;
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].genre, "indie");
        assert_eq!(counts[0].votes, 2);
        assert_eq!(counts[1].genre, "rock");
        assert_eq!(counts[1].votes, 1);
    }

    #[tokio::test]
    async fn clear_resets_all_counters() {
        let state = test_state().await;
        add_votes_from_tags(&state, vec!["pop".into()]).await.unwrap();

        clear(&state).await.unwrap();
        assert!(get(&state).await.is_empty());
    }

    #[tokio::test]
    async fn reads_degrade_without_storage() {
        let state = AppState::new(AppConfig::default());
        assert!(get(&state).await.is_empty());
        assert!(add_votes_from_tags(&state, vec!["rock".into()]).await.is_err());
    }
}
