use crate::{error::Error, response_cache::ResponseCache, retry::retry, RequestOptions};
use reqwest::Url;
use serde_json::Value;
use std::{sync::Arc, time::Duration};

#[derive(Debug, Clone)]
pub struct RequestClientConfig {
    /// Base used to resolve relative targets
    pub base_url: Option<Url>,

    pub max_attempts: u32,
    pub attempt_timeout: Duration,
    pub backoff_base: Duration,
}

impl Default for RequestClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            max_attempts: 3,
            attempt_timeout: Duration::from_millis(10_000),
            backoff_base: Duration::from_millis(1_000),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Neither read from nor write to the cache
    #[default]
    Bypass,

    /// Return live cached response if present, otherwise
    /// fetch and cache truthy response for `ttl`
    Use { ttl: Duration },
}

impl CachePolicy {
    pub const DEFAULT_TTL: Duration = Duration::from_millis(60_000);

    pub fn cached() -> Self {
        Self::Use {
            ttl: Self::DEFAULT_TTL,
        }
    }
}

///
/// HTTP JSON client with bounded retries and optional response cache.
///
/// Clones share the same cache and connection pool.
///
#[derive(Clone)]
pub struct RequestClient {
    inner: Arc<RequestClientInner>,
}

struct RequestClientInner {
    config: RequestClientConfig,
    http: reqwest::Client,
    cache: ResponseCache,
}

impl RequestClient {
    pub fn new(config: RequestClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: RequestClientConfig, http: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(RequestClientInner {
                config,
                http,
                cache: ResponseCache::new(),
            }),
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.inner.cache
    }

    ///
    /// Performs request and returns decoded JSON body.
    /// Empty body is decoded as [Value::Null].
    ///
    /// ### Errors
    /// - [Error::InvalidTarget] when target is empty or cannot be resolved
    /// - error of the last attempt when every attempt failed
    ///
    #[tracing::instrument(
        name = "Request",
        target = "request_client",
        skip_all,
        fields(url = %target, method = ?options.method)
    )]
    pub async fn call(
        &self,
        target: &str,
        options: &RequestOptions,
        cache_policy: CachePolicy,
    ) -> Result<Value, Error> {
        let url = self.resolve(target)?;
        let cache_key = options.cache_key(target).map_err(Error::Serialize)?;

        if let CachePolicy::Use { .. } = cache_policy {
            if let Some(value) = self.inner.cache.get(&cache_key).await {
                tracing::debug!("cache hit");
                return Ok(value);
            }
        }

        let config = &self.inner.config;
        let value = retry(
            config.max_attempts,
            config.backoff_base,
            |attempt| tracing::debug!(attempt, "sending request"),
            |attempt, err| tracing::warn!(attempt, %err, "request attempt failed"),
            move || self.attempt(url.clone(), options),
        )
        .await?;

        if let CachePolicy::Use { ttl } = cache_policy {
            if is_truthy(&value) {
                self.inner.cache.insert(cache_key, value.clone(), ttl).await;
            }
        }

        Ok(value)
    }

    async fn attempt(&self, url: Url, options: &RequestOptions) -> Result<Value, Error> {
        let timeout = self.inner.config.attempt_timeout;

        // dropping the future on timeout aborts the in-flight request
        tokio::time::timeout(timeout, self.send(url, options))
            .await
            .map_err(|_| Error::Timeout(timeout))?
    }

    async fn send(&self, url: Url, options: &RequestOptions) -> Result<Value, Error> {
        let mut request = self.inner.http.request(options.method.into(), url);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status { status, body });
        }

        decode_body(&body)
    }

    fn resolve(&self, target: &str) -> Result<Url, Error> {
        if target.is_empty() {
            return Err(Error::InvalidTarget("target is empty".to_string()));
        }

        if let Ok(url) = Url::parse(target) {
            return Ok(url);
        }

        let base = self.inner.config.base_url.as_ref().ok_or_else(|| {
            Error::InvalidTarget(format!("relative target {target} without base url"))
        })?;
        base.join(target)
            .map_err(|err| Error::InvalidTarget(format!("{target}: {err}")))
    }
}

fn decode_body(body: &str) -> Result<Value, Error> {
    if body.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(Error::Decode)
}

///
/// Only truthy responses are cached: null, false, 0 and "" are not.
///
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
