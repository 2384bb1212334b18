//! Error types shared by the Redis REST storage implementation.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`RedisRestError`] failures.
pub type RedisRestResult<T> = Result<T, RedisRestError>;

/// Failures that can occur while talking to the key-value REST endpoint.
#[derive(Debug, Error)]
pub enum RedisRestError {
    /// Required environment variable is missing.
    #[error("missing key-value store environment variable `{var}`")]
    MissingEnvVar { var: &'static str },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build key-value REST client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A command request could not be sent.
    #[error("failed to send `{command}` to the key-value endpoint")]
    RequestSend {
        command: String,
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint returned a non-success status code.
    #[error("unexpected key-value endpoint status {status} for `{command}`")]
    RequestStatus {
        command: String,
        status: StatusCode,
    },
    /// The response envelope could not be parsed.
    #[error("failed to decode key-value endpoint response for `{command}`")]
    DecodeResponse {
        command: String,
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint reported a command-level error.
    #[error("key-value endpoint rejected `{command}`: {message}")]
    CommandRejected { command: String, message: String },
}
