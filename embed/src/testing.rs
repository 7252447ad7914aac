use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use dns::{Lookup, LookupKey, LookupResult, Record, RecordType, Resolver, ResultCache};

pub fn record(data: &str) -> Record {
    Record {
        name: "example.com".into(),
        ttl: 300,
        data: data.into(),
    }
}

/// Answers from a per type script, falling back to one record naming the
/// key. Yields once before answering so concurrent lookups interleave.
#[derive(Clone, Default)]
pub struct Scripted {
    script: Arc<Mutex<HashMap<RecordType, VecDeque<LookupResult>>>>,
    pub calls: Arc<AtomicUsize>,
}

impl Scripted {
    pub fn then(self, record_type: RecordType, result: LookupResult) -> Self {
        self.script
            .lock()
            .unwrap()
            .entry(record_type)
            .or_default()
            .push_back(result);
        self
    }

    pub fn resolver(&self) -> Resolver {
        self.resolver_with(ResultCache::new())
    }

    pub fn resolver_with(&self, cache: ResultCache) -> Resolver {
        Resolver::new(self.clone(), cache)
    }
}

#[async_trait::async_trait]
impl Lookup for Scripted {
    async fn lookup(&self, key: &LookupKey) -> LookupResult {
        tokio::task::yield_now().await;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .script
            .lock()
            .unwrap()
            .get_mut(&key.record_type())
            .and_then(VecDeque::pop_front);
        scripted.unwrap_or_else(|| Ok(vec![record(&key.to_string())]))
    }
}
