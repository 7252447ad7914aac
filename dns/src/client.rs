use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};

pub const USER_AGENT: &str = concat!("dns-embed/", env!("CARGO_PKG_VERSION"));
/// Request timeout of [`CLIENT`], and of configured clients unless overridden.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
});
