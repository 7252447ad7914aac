mod client;
mod dow;
pub mod cache;
pub mod record;
pub mod resolver;

pub use cache::{CacheEntry, ResultCache};
pub use client::{DEFAULT_TIMEOUT_SECS, USER_AGENT};
pub use dow::{DohClient, DEFAULT_ENDPOINT};
pub use record::{LookupFailure, LookupKey, LookupResult, Record, RecordType};
pub use resolver::{Lookup, Resolver};
pub use reqwest::Url;
