pub mod current_song;
pub mod genre;
pub mod leaderboard;
pub mod vote_ledger;

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::{Mutex, RwLock, watch};

use crate::{
    config::AppConfig,
    dao::kv_store::KvStore,
    error::ServiceError,
    state::vote_ledger::VoteLedger,
};

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Cached copy of the streaming-account token with its fetch time, so reads
/// can skip the store while the cache is fresh.
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The token value read from the store.
    pub value: String,
    /// When the value was fetched.
    pub fetched_at: Instant,
}

/// Central application state: the storage handle, the per-record write gates,
/// and the per-client vote ledgers.
pub struct AppState {
    config: AppConfig,
    kv: RwLock<Option<Arc<dyn KvStore>>>,
    degraded: watch::Sender<bool>,
    leaderboard_gate: Mutex<()>,
    song_gate: Mutex<()>,
    genre_gate: Mutex<()>,
    ledgers: DashMap<String, VoteLedger>,
    admin_token_cache: Mutex<Option<CachedToken>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            config,
            kv: RwLock::new(None),
            degraded: degraded_tx,
            leaderboard_gate: Mutex::new(()),
            song_gate: Mutex::new(()),
            genre_gate: Mutex::new(()),
            ledgers: DashMap::new(),
            admin_token_cache: Mutex::new(None),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain a handle to the current key-value store, if one is installed.
    pub async fn kv_store(&self) -> Option<Arc<dyn KvStore>> {
        let guard = self.kv.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the key-value store or fail with a degraded-mode error.
    pub async fn require_kv_store(&self) -> Result<Arc<dyn KvStore>, ServiceError> {
        self.kv_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a storage backend and leave degraded mode.
    pub async fn install_kv_store(&self, store: Arc<dyn KvStore>) {
        {
            let mut guard = self.kv.write().await;
            *guard = Some(store);
        }
        self.update_degraded(false);
    }

    /// Remove the current storage backend and enter degraded mode.
    pub async fn clear_kv_store(&self) {
        {
            let mut guard = self.kv.write().await;
            guard.take();
        }
        self.update_degraded(true);
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.kv.read().await;
        guard.is_none()
    }

    /// Subscribe to degraded mode updates.
    pub fn degraded_watcher(&self) -> watch::Receiver<bool> {
        self.degraded.subscribe()
    }

    /// Gate serializing read-modify-write cycles on the leaderboard record.
    pub fn leaderboard_gate(&self) -> &Mutex<()> {
        &self.leaderboard_gate
    }

    /// Gate serializing read-modify-write cycles on the current-song record.
    pub fn song_gate(&self) -> &Mutex<()> {
        &self.song_gate
    }

    /// Gate serializing read-modify-write cycles on the genre counters.
    pub fn genre_gate(&self) -> &Mutex<()> {
        &self.genre_gate
    }

    /// Per-client vote ledgers keyed by the self-asserted client id.
    pub fn ledgers(&self) -> &DashMap<String, VoteLedger> {
        &self.ledgers
    }

    /// Cached streaming-account token guarded for concurrent refresh.
    pub fn admin_token_cache(&self) -> &Mutex<Option<CachedToken>> {
        &self.admin_token_cache
    }

    /// How long a cached token read stays fresh.
    pub fn admin_token_ttl(&self) -> Duration {
        self.config.admin_token_ttl()
    }

    fn update_degraded(&self, value: bool) {
        self.degraded.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}
