use std::sync::Arc;

use log::{debug, warn};

use crate::{
    cache::{CacheEntry, ResultCache},
    dow::DohClient,
    record::{LookupKey, LookupResult, RecordType},
};

/// A single uncached lookup, no retries.
#[async_trait::async_trait]
pub trait Lookup {
    async fn lookup(&self, key: &LookupKey) -> LookupResult;
}

/// Cache-aware front for a [`Lookup`].
#[derive(Clone)]
pub struct Resolver {
    cache: ResultCache,
    upstream: Arc<dyn Lookup + Send + Sync>,
}

impl Resolver {
    pub fn new<L>(upstream: L, cache: ResultCache) -> Self
    where
        L: Lookup + Send + Sync + 'static,
    {
        Self {
            cache,
            upstream: Arc::new(upstream),
        }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
        bypass_cache: bool,
    ) -> LookupResult {
        self.fetch(domain, record_type, bypass_cache).await.result
    }

    /// Like [`Resolver::resolve`], keeping the time the result was fetched.
    ///
    /// A network result always overwrites the cache entry, bypass or not.
    pub async fn fetch(
        &self,
        domain: &str,
        record_type: RecordType,
        bypass_cache: bool,
    ) -> CacheEntry {
        let key = LookupKey::new(domain, record_type);
        if !bypass_cache {
            if let Some(entry) = self.cache.get(&key) {
                debug!("{} -> cached", key);
                return entry;
            }
        }
        let entry = CacheEntry::now(self.upstream.lookup(&key).await);
        match &entry.result {
            Ok(records) => debug!("{} -> {} records", key, records.len()),
            Err(failure) => warn!("{} -> {}", key, failure),
        }
        self.cache.insert(key, entry.clone());
        entry
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DohClient::default(), ResultCache::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::Resolver;
    use crate::{
        cache::{CacheEntry, ResultCache},
        record::{LookupFailure, LookupKey, Record, RecordType},
        stub::Counting,
    };

    fn record(data: &str) -> Record {
        Record {
            name: "example.com".into(),
            ttl: 3600,
            data: data.into(),
        }
    }

    #[tokio::test]
    async fn second_resolve_hits_cache() {
        let upstream = Counting::new(Ok(vec![record("1.2.3.4")]));
        let calls = upstream.calls();
        let resolver = Resolver::new(upstream, ResultCache::new());

        let first = resolver.resolve("example.com", RecordType::A, false).await;
        let second = resolver.resolve("example.com", RecordType::A, false).await;
        assert_eq!(first, second);
        assert_eq!(first, Ok(vec![record("1.2.3.4")]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cache_hit_keeps_fetch_time() {
        let resolver = Resolver::new(Counting::new(Ok(Vec::new())), ResultCache::new());
        let first = resolver.fetch("example.com", RecordType::NS, false).await;
        let second = resolver.fetch("example.com", RecordType::NS, false).await;
        assert_eq!(first.fetched_at, second.fetched_at);
    }

    #[tokio::test]
    async fn bypass_always_looks_up_and_overwrites() {
        let cache = ResultCache::new();
        let key = LookupKey::new("example.com", RecordType::MX);
        cache.insert(key.clone(), CacheEntry::now(Err(LookupFailure::RequestFailed)));

        let upstream = Counting::new(Ok(vec![record("10 mail.example.com.")]));
        let calls = upstream.calls();
        let resolver = Resolver::new(upstream, cache.clone());

        let fresh = resolver.resolve("example.com", RecordType::MX, true).await;
        assert_eq!(fresh, Ok(vec![record("10 mail.example.com.")]));
        assert_eq!(cache.get(&key).unwrap().result, fresh);

        assert_eq!(
            resolver.resolve("example.com", RecordType::MX, true).await,
            fresh
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert_eq!(
            resolver.resolve("example.com", RecordType::MX, false).await,
            fresh
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_cached_too() {
        let upstream = Counting::new(Err(LookupFailure::ParseFailed));
        let calls = upstream.calls();
        let resolver = Resolver::new(upstream, ResultCache::new());
        for _ in 0..3 {
            assert_eq!(
                resolver.resolve("example.com", RecordType::TXT, false).await,
                Err(LookupFailure::ParseFailed)
            );
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolvers_sharing_a_cache_share_results() {
        let cache = ResultCache::new();
        let upstream = Counting::new(Ok(vec![record("::1")]));
        let calls = upstream.calls();
        let first = Resolver::new(upstream, cache.clone());
        let second = Resolver::new(Counting::new(Err(LookupFailure::RequestFailed)), cache);

        assert_eq!(
            first.resolve("example.com", RecordType::AAAA, false).await,
            Ok(vec![record("::1")])
        );
        assert_eq!(
            second.resolve("example.com", RecordType::AAAA, false).await,
            Ok(vec![record("::1")])
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
