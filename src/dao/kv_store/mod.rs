pub mod memory;
#[cfg(feature = "redis-store")]
pub mod redis_rest;

use futures::future::BoxFuture;

use crate::dao::storage::StorageResult;

/// Abstraction over the managed key-value service backing all server-side state.
///
/// Values are opaque strings; callers serialize records to JSON before writing
/// and parse after reading, so a round-trip through any backend reproduces the
/// record byte for byte. The trait mirrors the primitives the service exposes
/// (`get`/`set`/`del`/`lpush`/`lrange`/`keys`).
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> BoxFuture<'static, StorageResult<Option<String>>>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> BoxFuture<'static, StorageResult<()>>;
    /// Delete `key`; absent keys are not an error.
    fn del(&self, key: &str) -> BoxFuture<'static, StorageResult<()>>;
    /// Push `value` onto the head of the list stored under `key`.
    fn lpush(&self, key: &str, value: String) -> BoxFuture<'static, StorageResult<()>>;
    /// Return the list elements between `start` and `stop` inclusive.
    ///
    /// Negative indices count from the tail, `-1` being the last element.
    fn lrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<String>>>;
    /// List the keys matching `pattern` (a literal, or a `prefix*` glob).
    fn list_keys(&self, pattern: &str) -> BoxFuture<'static, StorageResult<Vec<String>>>;
    /// Verify that the backend is reachable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Attempt to re-establish connectivity after a failed health check.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}

/// Resolve an `lrange`-style index pair against a list of `len` elements,
/// returning the inclusive slice bounds or `None` for an empty selection.
pub(crate) fn resolve_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    if len == 0 {
        return None;
    }

    let clamp = |index: i64| -> i64 {
        if index < 0 {
            (len + index).max(0)
        } else {
            index.min(len - 1)
        }
    };

    let start = if start >= len { return None } else { clamp(start) };
    let stop = clamp(stop);
    if start > stop {
        return None;
    }

    Some((start as usize, stop as usize))
}

#[cfg(test)]
mod tests {
    use super::resolve_range;

    #[test]
    fn resolves_full_range() {
        assert_eq!(resolve_range(3, 0, -1), Some((0, 2)));
    }

    #[test]
    fn clamps_overlong_stop() {
        assert_eq!(resolve_range(3, 0, 99), Some((0, 2)));
    }

    #[test]
    fn negative_start_counts_from_tail() {
        assert_eq!(resolve_range(5, -2, -1), Some((3, 4)));
    }

    #[test]
    fn empty_selection_yields_none() {
        assert_eq!(resolve_range(0, 0, -1), None);
        assert_eq!(resolve_range(3, 5, 8), None);
        assert_eq!(resolve_range(3, 2, 1), None);
    }
}
