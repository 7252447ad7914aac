use std::sync::Arc;

use chrono::{DateTime, Local};
use dashmap::DashMap;

use crate::record::{LookupKey, LookupResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub result: LookupResult,
    pub fetched_at: DateTime<Local>,
}

impl CacheEntry {
    pub fn now(result: LookupResult) -> Self {
        Self {
            result,
            fetched_at: Local::now(),
        }
    }
}

/// Last result per key, shared by every clone of the handle.
///
/// Entries are never expired; every write replaces the previous entry whole.
#[derive(Default, Clone)]
pub struct ResultCache {
    entries: Arc<DashMap<LookupKey, CacheEntry>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &LookupKey) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: LookupKey, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CacheEntry, ResultCache};
    use crate::record::{LookupFailure, LookupKey, Record, RecordType};

    #[test]
    fn insert_overwrites_whole_entry() {
        let cache = ResultCache::new();
        let key = LookupKey::new("example.com", RecordType::A);
        cache.insert(key.clone(), CacheEntry::now(Err(LookupFailure::RequestFailed)));
        let record = Record {
            name: "example.com".into(),
            ttl: 300,
            data: "93.184.216.34".into(),
        };
        cache.insert(key.clone(), CacheEntry::now(Ok(vec![record.clone()])));
        assert_eq!(cache.get(&key).unwrap().result, Ok(vec![record]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_independent() {
        let cache = ResultCache::new();
        cache.insert(
            LookupKey::new("example.com", RecordType::A),
            CacheEntry::now(Ok(Vec::new())),
        );
        assert!(cache
            .get(&LookupKey::new("example.com", RecordType::AAAA))
            .is_none());
        assert!(cache
            .get(&LookupKey::new("example.org", RecordType::A))
            .is_none());
    }

    #[test]
    fn clones_share_entries() {
        let cache = ResultCache::new();
        let other = cache.clone();
        assert!(other.is_empty());
        cache.insert(
            LookupKey::new("example.com", RecordType::MX),
            CacheEntry::now(Ok(Vec::new())),
        );
        assert_eq!(other.len(), 1);
    }
}
