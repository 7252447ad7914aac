use std::path::PathBuf;

use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "DNS lookup";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub(super) resolver: Resolver,
    #[serde(default)]
    pub(super) page: Page,
    #[serde(default)]
    pub(super) embeds: Vec<Embed>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Resolver {
    pub(super) endpoint: Option<String>,
    pub(super) timeout_secs: Option<u64>,
    pub(super) user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Page {
    pub(super) title: Option<String>,
    pub(super) lookup_tool: Option<String>,
    pub(super) output: Option<PathBuf>,
    pub(super) refresh: Option<bool>,
    pub(super) fetched: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Embed {
    enable: Option<bool>,
    id: Option<String>,
    domain: String,
    /// comma separated, e.g. `"A, AAAA, MX"`
    types: String,
}

pub trait Switchable {
    fn enable(&self) -> bool;
}

impl Switchable for Embed {
    fn enable(&self) -> bool {
        self.enable.unwrap_or(true)
    }
}

impl Config {
    pub fn new(embeds: Vec<Embed>) -> Self {
        Self {
            embeds,
            ..Default::default()
        }
    }

    /// Config written on first run.
    pub fn example() -> Self {
        Self::new(vec![Embed::new("example.com", "A, AAAA, MX, TXT").with_id("example")])
    }

    pub fn embeds(&self) -> impl Iterator<Item = &Embed> {
        self.embeds.iter().filter(|embed| embed.enable())
    }

    pub fn title(&self) -> &str {
        self.page.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn output(&self) -> Option<PathBuf> {
        self.page.output.clone()
    }
}

impl Embed {
    pub fn new(domain: &str, types: &str) -> Self {
        Self {
            enable: None,
            id: None,
            domain: domain.to_string(),
            types: types.to_string(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn types(&self) -> &str {
        &self.types
    }
}
