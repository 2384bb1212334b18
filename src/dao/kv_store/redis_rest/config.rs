use super::error::{RedisRestError, RedisRestResult};

/// Runtime configuration describing how to reach the key-value REST endpoint.
#[derive(Debug, Clone)]
pub struct RedisRestConfig {
    pub base_url: String,
    pub token: String,
}

impl RedisRestConfig {
    /// Construct a configuration from an explicit endpoint and bearer token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> RedisRestResult<Self> {
        let base_url = std::env::var("STORAGE_KV_REST_API_URL").map_err(|_| {
            RedisRestError::MissingEnvVar {
                var: "STORAGE_KV_REST_API_URL",
            }
        })?;
        let token = std::env::var("STORAGE_KV_REST_API_TOKEN").map_err(|_| {
            RedisRestError::MissingEnvVar {
                var: "STORAGE_KV_REST_API_TOKEN",
            }
        })?;

        Ok(Self::new(base_url, token))
    }
}
