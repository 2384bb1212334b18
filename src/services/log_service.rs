//! Append-only user action log.
//!
//! Each entry is stored as JSON under `user_action:<entry id>` and its id is
//! pushed onto three index lists: all actions, per-user, and per-action-type.
//! Listing walks an index newest-first and skips records that have gone
//! missing or no longer parse.

use tracing::warn;
use uuid::Uuid;

use crate::{
    dao::models::{ACTION_LOG_PREFIX, ActionLogEntity},
    dto::{log::LogActionRequest, now_rfc3339},
    error::ServiceError,
    state::SharedState,
};

/// Default number of entries returned when the caller does not cap the list.
const DEFAULT_LIST_LIMIT: usize = 100;

/// Append one action to the log and its index lists.
pub async fn log_action(state: &SharedState, request: LogActionRequest) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;

    let entity = ActionLogEntity {
        timestamp: now_rfc3339(),
        user_id: request.user_id,
        action: request.action,
        metadata: request.metadata,
    };

    let entry_id = Uuid::new_v4().to_string();
    let key = format!("{ACTION_LOG_PREFIX}{entry_id}");
    let raw = super::record::encode(&key, &entity)?;

    store.set(&key, raw).await?;
    store
        .lpush(&format!("{ACTION_LOG_PREFIX}all"), entry_id.clone())
        .await?;
    store
        .lpush(
            &format!("{ACTION_LOG_PREFIX}user:{}", entity.user_id),
            entry_id.clone(),
        )
        .await?;
    store
        .lpush(
            &format!("{ACTION_LOG_PREFIX}action:{}", entity.action),
            entry_id,
        )
        .await?;

    Ok(())
}

/// List recent entries, newest first, optionally restricted to one user.
pub async fn list_recent(
    state: &SharedState,
    limit: Option<usize>,
    user_id: Option<&str>,
) -> Result<Vec<ActionLogEntity>, ServiceError> {
    let store = state.require_kv_store().await?;

    let index_key = match user_id {
        Some(user) => format!("{ACTION_LOG_PREFIX}user:{user}"),
        None => format!("{ACTION_LOG_PREFIX}all"),
    };
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).max(1);

    let entry_ids = store.lrange(&index_key, 0, limit as i64 - 1).await?;

    let mut entries = Vec::with_capacity(entry_ids.len());
    for entry_id in entry_ids {
        let key = format!("{ACTION_LOG_PREFIX}{entry_id}");
        match store.get(&key).await? {
            Some(raw) => match serde_json::from_str::<ActionLogEntity>(&raw) {
                Ok(entity) => entries.push(entity),
                Err(err) => warn!(key, error = %err, "skipping unparsable log entry"),
            },
            None => warn!(key, "log index references a missing entry; skipping"),
        }
    }

    Ok(entries)
}

/// Delete every log record and index list; returns how many keys were removed.
pub async fn clear(state: &SharedState) -> Result<usize, ServiceError> {
    let store = state.require_kv_store().await?;

    let keys = store.list_keys(&format!("{ACTION_LOG_PREFIX}*")).await?;
    for key in &keys {
        store.del(key).await?;
    }
    Ok(keys.len())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::AppConfig, dao::kv_store::memory::MemoryKvStore, state::AppState};

    async fn test_state() -> SharedState {
        let state = AppState::new(AppConfig::default());
        state.install_kv_store(Arc::new(MemoryKvStore::new())).await;
        state
    }

    fn request(user_id: &str, action: &str) -> LogActionRequest {
        LogActionRequest {
            user_id: user_id.into(),
            action: action.into(),
            metadata: serde_json::json!({"source": "test"}),
        }
    }

    #[tokio::test]
    async fn entries_list_newest_first() {
        let state = test_state().await;
        log_action(&state, request("alice", "vote")).await.unwrap();
        log_action(&state, request("bob", "add_track")).await.unwrap();

        let entries = list_recent(&state, None, None).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user_id, "bob");
        assert_eq!(entries[1].user_id, "alice");
    }

    #[tokio::test]
    async fn user_filter_and_limit() {
        let state = test_state().await;
        log_action(&state, request("alice", "vote")).await.unwrap();
        log_action(&state, request("bob", "vote")).await.unwrap();
        log_action(&state, request("alice", "remove_track"))
            .await
            .unwrap();

        let entries = list_recent(&state, None, Some("alice")).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.user_id == "alice"));
        assert_eq!(entries[0].action, "remove_track");

        let entries = list_recent(&state, Some(1), None).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn clear_removes_entries_and_indexes() {
        let state = test_state().await;
        log_action(&state, request("alice", "vote")).await.unwrap();

        // One record plus the all, user and action index lists.
        let removed = clear(&state).await.unwrap();
        assert_eq!(removed, 4);
        assert!(list_recent(&state, None, None).await.unwrap().is_empty());
    }
}
