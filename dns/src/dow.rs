//! DNS over HTTPS, JSON flavour
//!
//! `GET {endpoint}?name={domain}&type={type}` with `Accept: application/dns-json`

use log::debug;
use once_cell::sync::Lazy;
use reqwest::{header::ACCEPT, Client, Url};
use serde_json::{Map, Value};

use crate::{
    client::CLIENT,
    record::{LookupFailure, LookupKey, LookupResult, Record},
    resolver::Lookup,
};

pub const DEFAULT_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

const DNS_JSON: &str = "application/dns-json";

static DEFAULT_URL: Lazy<Url> = Lazy::new(|| Url::parse(DEFAULT_ENDPOINT).unwrap());

#[derive(Clone)]
pub struct DohClient {
    endpoint: Url,
    client: Client,
}

impl DohClient {
    pub fn new(endpoint: Url, client: Client) -> Self {
        Self { endpoint, client }
    }

    /// Uses the shared client with the default user agent and timeout.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self::new(endpoint, CLIENT.clone())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Default for DohClient {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_URL.clone())
    }
}

#[async_trait::async_trait]
impl Lookup for DohClient {
    async fn lookup(&self, key: &LookupKey) -> LookupResult {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("name", key.domain()), ("type", key.record_type().as_str())])
            .header(ACCEPT, DNS_JSON)
            .send()
            .await
            .map_err(|e| {
                debug!("{} -> {}", key, e);
                LookupFailure::RequestFailed
            })?;

        if !response.status().is_success() {
            debug!("{} -> status {}", key, response.status());
            return Err(LookupFailure::RequestFailed);
        }

        match response.bytes().await {
            Ok(body) => records(Some(&body[..])),
            Err(e) => {
                debug!("{} -> {}", key, e);
                records(None)
            }
        }
    }
}

/// Reads a reply body, `None` when it could not be read.
///
/// The body must be a JSON object whose `Status` is 0. `Answer` entries are
/// taken as they come, anything but an array counts as no answer.
fn records(body: Option<&[u8]>) -> LookupResult {
    let reply = body
        .and_then(|body| serde_json::from_slice::<Map<String, Value>>(body).ok())
        .ok_or(LookupFailure::ParseFailed)?;

    if reply.get("Status").and_then(Value::as_f64) != Some(0.0) {
        return Err(LookupFailure::ParseFailed);
    }

    Ok(match reply.get("Answer") {
        Some(Value::Array(answers)) => answers.iter().map(record).collect(),
        _ => Vec::new(),
    })
}

fn record(answer: &Value) -> Record {
    Record {
        name: text(answer.get("name")),
        ttl: answer
            .get("TTL")
            .and_then(Value::as_u64)
            .map_or(0, |ttl| u32::try_from(ttl).unwrap_or(u32::MAX)),
        data: text(answer.get("data")),
    }
}

/// Strings verbatim, other values as their JSON text.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
