//! Bounded response cache for outbound provider requests.
//!
//! Keyed by the exact outbound URL. Capacity-bounded with oldest-first
//! eviction; time-unaware. The cache is a latency optimization shared by
//! the HTTP-backed clients -- it is injected, never process-global, so
//! tests get cache isolation for free.

use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

/// A bounded URL → JSON response cache with oldest-first eviction.
pub struct ResponseCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, serde_json::Value>,
    order: VecDeque<String>,
}

impl ResponseCache {
    /// Creates a cache holding at most `capacity` responses.
    pub fn new(capacity: usize) -> Self {
        ResponseCache {
            capacity,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Returns the cached response for `url`, if present.
    pub async fn get(&self, url: &str) -> Option<serde_json::Value> {
        let inner = self.inner.lock().await;
        inner.entries.get(url).cloned()
    }

    /// Stores a response, evicting the oldest entry if at capacity.
    pub async fn put(&self, url: &str, value: serde_json::Value) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.lock().await;
        if inner.entries.contains_key(url) {
            inner.entries.insert(url.to_string(), value);
            return;
        }
        while inner.entries.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }
        inner.entries.insert(url.to_string(), value);
        inner.order.push_back(url.to_string());
    }

    /// Number of cached responses.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    /// Whether the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
