use serde_json::Value;
use std::{collections::HashMap, time::Duration};
use tokio::{sync::Mutex, time::Instant};

struct CacheEntry {
    value: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) >= self.ttl
    }
}

///
/// In-memory cache of decoded responses.
///
/// There is no background sweep. Expired entry is removed
/// only when its key is looked up again.
///
#[derive(Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().await;

        let expired = entries.get(key)?.is_expired(Instant::now());
        if expired {
            entries.remove(key);
            tracing::trace!(key, "evicted expired cache entry");
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: String, value: Value, ttl: Duration) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
            ttl,
        };

        self.entries.lock().await.insert(key, entry);
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
