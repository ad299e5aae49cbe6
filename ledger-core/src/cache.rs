use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::trace;

use crate::{LedgerError, client::LedgerClient, responder::QueryParams};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

type CacheKey = (String, QueryParams);

struct Entry {
    ts: Instant,
    result: Result<Value, LedgerError>,
}

/// Memoizes lookups of the wrapped client for `ttl`. Errors are cached too.
pub struct CachedClient<C> {
    inner: C,
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, Entry>>,
}

impl<C: LedgerClient> CachedClient<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<C: LedgerClient> LedgerClient for CachedClient<C> {
    fn query(&self, endpoint: &str, params: &QueryParams) -> Result<Value, LedgerError> {
        let key = (endpoint.to_string(), params.clone());
        let now = Instant::now();
        {
            let entries = self.entries.lock();
            if let Some(entry) = entries.get(&key) {
                if now.duration_since(entry.ts) < self.ttl {
                    trace!(endpoint, "lookup cache hit");
                    return entry.result.clone();
                }
            }
        }

        let result = self.inner.query(endpoint, params);
        let now = Instant::now();
        let mut entries = self.entries.lock();
        // evict expired keys
        entries.retain(|_, e| now.duration_since(e.ts) < self.ttl);
        entries.insert(
            key,
            Entry {
                ts: now,
                result: result.clone(),
            },
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::params;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl LedgerClient for Counting {
        fn query(&self, endpoint: &str, _params: &QueryParams) -> Result<Value, LedgerError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if endpoint == "missing" {
                return Err(LedgerError::AccountNotFound);
            }
            Ok(serde_json::json!({ "call": n }))
        }
    }

    #[test]
    fn repeats_are_served_from_cache() {
        let client = CachedClient::new(Counting::default(), Duration::from_secs(60));
        let a = client.query("heartbeat", &QueryParams::new()).unwrap();
        let b = client.query("heartbeat", &QueryParams::new()).unwrap();
        assert_eq!(a, b);
        assert_eq!(client.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn keys_include_params() {
        let client = CachedClient::new(Counting::default(), Duration::from_secs(60));
        client.query("account-lookup", &params(&[("address", "A")])).unwrap();
        client.query("account-lookup", &params(&[("address", "B")])).unwrap();
        assert_eq!(client.len(), 2);
        assert_eq!(client.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn errors_are_memoized() {
        let client = CachedClient::new(Counting::default(), Duration::from_secs(60));
        for _ in 0..3 {
            assert_eq!(
                client.query("missing", &QueryParams::new()),
                Err(LedgerError::AccountNotFound)
            );
        }
        assert_eq!(client.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn expired_entries_are_refreshed() {
        let client = CachedClient::new(Counting::default(), Duration::ZERO);
        client.query("heartbeat", &QueryParams::new()).unwrap();
        let second = client.query("heartbeat", &QueryParams::new()).unwrap();
        assert_eq!(second["call"], 1);
    }

    #[test]
    fn expired_keys_are_evicted_on_insert() {
        let client = CachedClient::new(Counting::default(), Duration::ZERO);
        for i in 0..1_000 {
            let address = format!("NX{:06}", i);
            client.query("account-lookup", &params(&[("address", &address)])).unwrap();
        }
        assert_eq!(client.len(), 1);
        assert_eq!(client.inner.calls.load(Ordering::SeqCst), 1_000);
    }

    #[test]
    fn live_keys_survive_eviction() {
        let client = CachedClient::new(Counting::default(), Duration::from_secs(60));
        for address in ["A", "B", "C"] {
            client.query("account-lookup", &params(&[("address", address)])).unwrap();
        }
        assert_eq!(client.len(), 3);
    }

    #[test]
    fn clear_forces_a_new_lookup() {
        let client = CachedClient::new(Counting::default(), Duration::from_secs(60));
        client.query("heartbeat", &QueryParams::new()).unwrap();
        client.clear();
        assert!(client.is_empty());
        client.query("heartbeat", &QueryParams::new()).unwrap();
        assert_eq!(client.inner.calls.load(Ordering::SeqCst), 2);
    }
}
