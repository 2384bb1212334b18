use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Ping the key-value store and report the result alongside the degraded
/// flag.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let storage = match state.kv_store().await {
        Some(store) => match store.health_check().await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "storage health check failed");
                false
            }
        },
        None => {
            warn!("storage unavailable (degraded mode)");
            false
        }
    };

    HealthResponse::report(state.is_degraded().await, storage)
}
