use anyhow::anyhow;
use reqwest::Url;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,
    pub max_http_content_len: usize,

    /// Base of relative backend targets
    pub backend_url: Url,
    pub notifications_sink_url: Url,
    pub feed_cache_ttl: Duration,

    pub currency_label: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("LOTS_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("LOTS_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("LOTS_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let max_http_content_len =
            Self::env_var("LOTS_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let backend_url = Self::parse_base_url(Self::env_var("LOTS_NOTIFIER_BACKEND_URL")?)?;
        let notifications_sink_url =
            Url::parse(&Self::env_var("LOTS_NOTIFIER_NOTIFICATIONS_SINK_URL")?)?;
        let feed_cache_ttl = Self::env_var("LOTS_NOTIFIER_FEED_CACHE_TTL")?.parse()?;
        let feed_cache_ttl = Duration::from_secs(feed_cache_ttl);
        let currency_label = Self::env_var("LOTS_NOTIFIER_CURRENCY_LABEL")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            max_http_content_len,
            backend_url,
            notifications_sink_url,
            feed_cache_ttl,
            currency_label,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    ///
    /// Relative targets are joined to the base, so it has to end with `/`
    /// or the last path segment would be replaced.
    ///
    fn parse_base_url(mut url: String) -> anyhow::Result<Url> {
        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Url::parse(&url)?)
    }
}
