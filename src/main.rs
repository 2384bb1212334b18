//! Co-playlist backend binary entrypoint wiring REST routes and the key-value store.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dao;
mod dto;
mod error;
mod routes;
mod services;
mod state;

use config::AppConfig;
use dao::kv_store::{KvStore, memory::MemoryKvStore};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let app_state = AppState::new(config);

    spawn_storage(app_state.clone());
    tokio::spawn(log_degraded_transitions(app_state.clone()));

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], listen_port()));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("bind listener")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    Ok(())
}

/// Pick a storage backend: the managed REST key-value service when its
/// environment variables are set, otherwise a process-local in-memory store
/// whose contents are lost on restart.
fn spawn_storage(state: state::SharedState) {
    #[cfg(feature = "redis-store")]
    {
        use dao::kv_store::redis_rest::{RedisRestConfig, RedisRestStore};
        use dao::storage::StorageError;

        if let Ok(config) = RedisRestConfig::from_env() {
            tokio::spawn(services::storage_supervisor::run(state, move || {
                let config = config.clone();
                async move {
                    let store = RedisRestStore::connect(config).await.map_err(|err| {
                        StorageError::unavailable("key-value endpoint unreachable".into(), err)
                    })?;
                    Ok(Arc::new(store) as Arc<dyn KvStore>)
                }
            }));
            return;
        }

        tracing::warn!(
            "STORAGE_KV_REST_API_URL/TOKEN not set; falling back to in-memory storage"
        );
    }

    tokio::spawn(install_memory_store(state));
}

/// Log degraded-mode transitions as the supervisor flips the flag.
async fn log_degraded_transitions(state: state::SharedState) {
    let mut watcher = state.degraded_watcher();
    while watcher.changed().await.is_ok() {
        if *watcher.borrow_and_update() {
            tracing::warn!("entered degraded mode; writes will be refused");
        } else {
            info!("left degraded mode");
        }
    }
}

async fn install_memory_store(state: state::SharedState) {
    let store: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());
    state.install_kv_store(store).await;
    info!("in-memory storage installed; state is process-local");
}

/// Listen port, from `PORT` or `SERVER_PORT`, defaulting to 8080.
fn listen_port() -> u16 {
    env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080)
}

/// Attach the cross-cutting middleware layers. CORS is wide open because the
/// party UI is served from a separate origin.
fn build_router(state: state::SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Install the tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
