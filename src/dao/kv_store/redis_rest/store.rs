use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::dao::{
    kv_store::KvStore,
    storage::{StorageError, StorageResult},
};

use super::{
    config::RedisRestConfig,
    error::{RedisRestError, RedisRestResult},
};

/// Response envelope wrapping every command result.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Reply<T> {
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// [`KvStore`] backed by the managed REST key-value endpoint.
#[derive(Clone)]
pub struct RedisRestStore {
    client: Client,
    base_url: Arc<str>,
    token: Arc<str>,
}

impl RedisRestStore {
    /// Establish a connection to the endpoint and verify it answers a ping.
    pub async fn connect(config: RedisRestConfig) -> RedisRestResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| RedisRestError::ClientBuilder { source })?;

        let store = Self {
            client,
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            token: Arc::from(config.token),
        };

        store.ping().await?;
        Ok(store)
    }

    fn request(&self, method: Method, command: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, command);
        self.client
            .request(method, url)
            .bearer_auth(self.token.as_ref())
    }

    async fn execute<T>(&self, method: Method, command: String, body: Option<String>) -> RedisRestResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut builder = self.request(method, &command);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| RedisRestError::RequestSend {
                command: command.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedisRestError::RequestStatus { command, status });
        }

        let reply: Reply<T> =
            response
                .json()
                .await
                .map_err(|source| RedisRestError::DecodeResponse {
                    command: command.clone(),
                    source,
                })?;

        if let Some(message) = reply.error {
            return Err(RedisRestError::CommandRejected { command, message });
        }

        Ok(reply.result)
    }

    /// Verify that the endpoint is reachable and authenticated.
    pub async fn ping(&self) -> RedisRestResult<()> {
        self.execute::<String>(Method::GET, "ping".into(), None)
            .await
            .map(|_| ())
    }

    async fn get_value(&self, key: &str) -> RedisRestResult<Option<String>> {
        self.execute(Method::GET, format!("get/{key}"), None).await
    }

    async fn set_value(&self, key: &str, value: String) -> RedisRestResult<()> {
        self.execute::<String>(Method::POST, format!("set/{key}"), Some(value))
            .await
            .map(|_| ())
    }

    async fn del_key(&self, key: &str) -> RedisRestResult<()> {
        self.execute::<i64>(Method::GET, format!("del/{key}"), None)
            .await
            .map(|_| ())
    }

    async fn lpush_value(&self, key: &str, value: String) -> RedisRestResult<()> {
        self.execute::<i64>(Method::POST, format!("lpush/{key}"), Some(value))
            .await
            .map(|_| ())
    }

    async fn lrange_values(&self, key: &str, start: i64, stop: i64) -> RedisRestResult<Vec<String>> {
        self.execute(Method::GET, format!("lrange/{key}/{start}/{stop}"), None)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn keys_matching(&self, pattern: &str) -> RedisRestResult<Vec<String>> {
        self.execute(Method::GET, format!("keys/{pattern}"), None)
            .await
            .map(Option::unwrap_or_default)
    }
}

fn storage_error(err: RedisRestError) -> StorageError {
    StorageError::unavailable("key-value REST request failed".into(), err)
}

impl KvStore for RedisRestStore {
    fn get(&self, key: &str) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move { this.get_value(&key).await.map_err(storage_error) })
    }

    fn set(&self, key: &str, value: String) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move { this.set_value(&key, value).await.map_err(storage_error) })
    }

    fn del(&self, key: &str) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move { this.del_key(&key).await.map_err(storage_error) })
    }

    fn lpush(&self, key: &str, value: String) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move { this.lpush_value(&key, value).await.map_err(storage_error) })
    }

    fn lrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let this = self.clone();
        let key = key.to_owned();
        Box::pin(async move {
            this.lrange_values(&key, start, stop)
                .await
                .map_err(storage_error)
        })
    }

    fn list_keys(&self, pattern: &str) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let this = self.clone();
        let pattern = pattern.to_owned();
        Box::pin(async move { this.keys_matching(&pattern).await.map_err(storage_error) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        Box::pin(async move { this.ping().await.map_err(storage_error) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let this = self.clone();
        Box::pin(async move { this.ping().await.map_err(storage_error) })
    }
}
