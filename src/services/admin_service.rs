//! Streaming-account token register and admin password checks.
//!
//! The token is persisted in the store so every server instance hands out
//! the same credential; reads go through a TTL cache instead of the
//! original's subscriber-callback refresh timer, so a token read is at most
//! one store round-trip per freshness window.

use std::time::Instant;

use tracing::warn;

use crate::{
    dao::models::ADMIN_TOKEN_KEY,
    dto::admin::VerifyPasswordResponse,
    error::ServiceError,
    state::{CachedToken, SharedState},
};

/// Compare a submitted password against the configured admin password.
pub fn verify_password(state: &SharedState, password: &str) -> VerifyPasswordResponse {
    let valid = password == state.config().admin_password();
    VerifyPasswordResponse {
        success: valid,
        message: if valid {
            "Password verified".into()
        } else {
            "Invalid password".into()
        },
    }
}

/// Current streaming-account token, if one is stored.
///
/// Served from the cache while it is fresh; reads degrade to `None` when
/// storage is unreachable (without poisoning the cache).
pub async fn get_token(state: &SharedState) -> Option<String> {
    let mut cache = state.admin_token_cache().lock().await;

    if let Some(cached) = cache.as_ref() {
        if cached.fetched_at.elapsed() < state.admin_token_ttl() {
            return Some(cached.value.clone()).filter(|token| !token.is_empty());
        }
    }

    let Some(store) = state.kv_store().await else {
        warn!("admin token read while storage unavailable");
        return None;
    };

    match store.get(ADMIN_TOKEN_KEY).await {
        Ok(value) => {
            let token = value.unwrap_or_default();
            *cache = Some(CachedToken {
                value: token.clone(),
                fetched_at: Instant::now(),
            });
            Some(token).filter(|token| !token.is_empty())
        }
        Err(err) => {
            warn!(error = %err, "failed to read admin token");
            None
        }
    }
}

/// Store a new streaming-account token, reading it back to confirm the write.
pub async fn set_token(state: &SharedState, token: String) -> Result<String, ServiceError> {
    let store = state.require_kv_store().await?;

    store.set(ADMIN_TOKEN_KEY, token).await?;
    let stored = store.get(ADMIN_TOKEN_KEY).await?.unwrap_or_default();

    let mut cache = state.admin_token_cache().lock().await;
    *cache = Some(CachedToken {
        value: stored.clone(),
        fetched_at: Instant::now(),
    });

    Ok(stored)
}

/// Remove the stored token and drop the cache.
pub async fn clear_token(state: &SharedState) -> Result<(), ServiceError> {
    let store = state.require_kv_store().await?;
    store.del(ADMIN_TOKEN_KEY).await?;

    let mut cache = state.admin_token_cache().lock().await;
    *cache = None;
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
    async fn password_verdicts() {
        let state = test_state().await;

        let verdict = verify_password(&state, state.config().admin_password());
        assert!(verdict.success);

        let verdict = verify_password(&state, "wrong");
        assert!(!verdict.success);
        assert_eq!(verdict.message, "Invalid password");
    }

    #[tokio::test]
    async fn token_set_get_clear_round_trip() {
        let state = test_state().await;
        assert_eq!(get_token(&state).await, None);

        let stored = set_token(&state, "BQ-access-token".into()).await.unwrap();
        assert_eq!(stored, "BQ-access-token");
        assert_eq!(get_token(&state).await.as_deref(), Some("BQ-access-token"));

        clear_token(&state).await.unwrap();
        assert_eq!(get_token(&state).await, None);
    }

    #[tokio::test]
    async fn fresh_cache_skips_the_store() {
        let state = test_state().await;
        set_token(&state, "cached".into()).await.unwrap();

        // Drop the store entirely: a fresh cache still answers reads.
        state.clear_kv_store().await;
        assert_eq!(get_token(&state).await.as_deref(), Some("cached"));
    }
}
