//! Session flags: the active flag gating voting, and the session type label.

use tracing::warn;

use crate::{
    dao::models::{SESSION_STATUS_KEY, SESSION_TYPE_KEY},
    error::ServiceError,
    state::SharedState,
};

/// Whether the listening session is currently open. Reads degrade to
/// inactive when storage is unreachable.
pub async fn is_active(state: &SharedState) -> bool {
    let Some(store) = state.kv_store().await else {
        warn!("session read while storage unavailable; reporting inactive");
        return false;
    };

    match store.get(SESSION_STATUS_KEY).await {
        Ok(value) => matches!(value.as_deref(), Some("true")),
        Err(err) => {
            warn!(error = %err, "failed to read session status; reporting inactive");
            false
        }
    }
}

/// Open or close the session.
pub async fn set_active(state: &SharedState, active: bool) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;
    store
        .set(SESSION_STATUS_KEY, active.to_string())
        .await?;
    Ok(())
}

/// Current session type label, if one is set. Reads degrade to `None`.
pub async fn get_type(state: &SharedState) -> Option<String> {
    let Some(store) = state.kv_store().await else {
        warn!("session type read while storage unavailable");
        return None;
    };

    match store.get(SESSION_TYPE_KEY).await {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            warn!(error = %err, "failed to read session type");
            None
        }
    }
}

/// Set the session type label.
pub async fn set_type(state: &SharedState, session_type: &str) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;
    store.set(SESSION_TYPE_KEY, session_type.to_owned()).await?;
    Ok(())
}

/// Clear the session type label.
pub async fn clear_type(state: &SharedState) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;
    store.del(SESSION_TYPE_KEY).await?;
    Ok(())
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

    #[tokio::test]
    async fn session_defaults_to_inactive_and_toggles() {
        let state = test_state().await;
        assert!(!is_active(&state).await);

        set_active(&state, true).await.unwrap();
        assert!(is_active(&state).await);

        set_active(&state, false).await.unwrap();
        assert!(!is_active(&state).await);
    }

    #[tokio::test]
    async fn session_type_set_get_clear() {
        let state = test_state().await;
        assert_eq!(get_type(&state).await, None);

        set_type(&state, "listening_party").await.unwrap();
        assert_eq!(get_type(&state).await.as_deref(), Some("listening_party"));

        clear_type(&state).await.unwrap();
        assert_eq!(get_type(&state).await, None);
    }

    #[tokio::test]
    async fn reads_degrade_without_storage() {
        let state = AppState::new(AppConfig::default());
        assert!(!is_active(&state).await);
        assert_eq!(get_type(&state).await, None);
    }
}
