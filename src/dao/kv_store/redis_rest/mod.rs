//! Client for a managed Redis-compatible key-value service exposed over REST.
//!
//! Commands map onto URL paths (`/get/<key>`, `/lrange/<key>/<start>/<stop>`)
//! with bearer-token authentication; `set` and `lpush` carry the value in the
//! request body so arbitrary JSON survives without path escaping.

pub mod config;
pub mod error;
mod store;

pub use config::RedisRestConfig;
pub use error::{RedisRestError, RedisRestResult};
pub use store::RedisRestStore;
