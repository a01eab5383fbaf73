//! Expiring in-memory body cache keyed by source URL.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

/// Defines the behavior of the in-memory cache for a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    content_type: String,
    expires_at: Instant,
}

/// Shared store behind `AuClient`. Last writer wins; there is no other coordination.
#[derive(Debug, Default)]
pub(crate) struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
}

impl CacheStore {
    pub(crate) async fn get(&self, url: &Url) -> Option<(String, String)> {
        let guard = self.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some((entry.body.clone(), entry.content_type.clone()));
        }
        None
    }

    pub(crate) async fn put(&self, url: &Url, body: &str, content_type: &str, ttl: Duration) {
        let entry = CacheEntry {
            body: body.to_string(),
            content_type: content_type.to_string(),
            expires_at: Instant::now() + ttl,
        };
        let mut guard = self.map.write().await;
        guard.insert(url.as_str().to_string(), entry);
    }

    pub(crate) async fn clear(&self) {
        self.map.write().await.clear();
    }
}
