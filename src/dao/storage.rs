use std::error::Error;
use thiserror::Error;

/// Result alias used by every [`KvStore`](crate::dao::kv_store::KvStore)
/// method.
pub type StorageResult<T> = Result<T, StorageError>;

/// Backend-agnostic storage failure.
///
/// Every backend folds its transport and protocol errors into this one
/// variant; callers only decide between retrying, degrading, or refusing.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a backend failure with a short operator-facing message.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
