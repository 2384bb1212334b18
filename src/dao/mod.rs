/// Key-value storage backends.
pub mod kv_store;
/// Persisted record definitions and key names.
pub mod models;
/// Storage abstraction layer shared by all backends.
pub mod storage;
