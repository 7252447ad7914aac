use std::{io, path::Path, time::Duration};

use dns::{
    DohClient, Resolver as DnsResolver, ResultCache, Url, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
    USER_AGENT,
};
use embed::{
    page::{Document, Element},
    render::DEFAULT_LOOKUP_TOOL,
    RenderOptions,
};
use reqwest::ClientBuilder;
use thiserror::Error;
use toml::{de::Error as TomlDeError, ser::Error as TomlSerError};

use crate::dirs;
use crate::utils::{create_dir_all, read_to_string, write};

pub use self::format::*;

mod format;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file format error")]
    TomlDe(#[from] TomlDeError),
    #[error("serializing config error")]
    TomlSer(#[from] TomlSerError),
    #[error("invalid url in config")]
    Url(#[from] url::ParseError),
    #[error("cannot build http client")]
    Client(#[from] reqwest::Error),
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("config directory not found")]
    NoConfigDir,
}

impl Config {
    /// Reads `path`, or the default config file which is created with an
    /// example when missing.
    pub async fn from_file(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Ok(parse(read_to_string(path).await?.as_bytes())?);
        }
        let config_file = dirs::config_file().ok_or(ConfigError::NoConfigDir)?;
        let config = if config_file.is_file() {
            parse(read_to_string(&config_file).await?.as_bytes())?
        } else {
            let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
            create_dir_all(&config_dir).await?;
            let default_config = Config::example();
            write(&config_file, &stringify(&default_config)?).await?;
            log::info!("wrote example config to {:?}", config_file);
            default_config
        };
        Ok(config)
    }

    pub fn resolver(&self) -> Result<DnsResolver, ConfigError> {
        let endpoint = Url::parse(self.resolver.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        let client = ClientBuilder::new()
            .user_agent(self.user_agent())
            .timeout(self.timeout())
            .build()?;
        Ok(DnsResolver::new(
            DohClient::new(endpoint, client),
            ResultCache::new(),
        ))
    }

    fn user_agent(&self) -> &str {
        self.resolver.user_agent.as_deref().unwrap_or(USER_AGENT)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.resolver.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        Ok(RenderOptions {
            lookup_tool: Url::parse(
                self.page.lookup_tool.as_deref().unwrap_or(DEFAULT_LOOKUP_TOOL),
            )?,
            refresh: self.page.refresh.unwrap_or(true),
            fetched: self.page.fetched.unwrap_or(true),
        })
    }

    /// A page with one embed element per enabled `[[embeds]]` entry.
    pub fn document(&self) -> Document {
        let body = self.embeds().fold(Element::new("body"), |body, embed| {
            let element = Element::embed(embed.domain(), embed.types());
            body.with_child(match embed.id() {
                Some(id) => element.with_attribute("id", id),
                None => element,
            })
        });
        Document::new(self.title()).with_body(body)
    }
}

fn parse(slice: &[u8]) -> Result<Config, TomlDeError> {
    toml::from_slice(slice)
}

fn stringify(config: &Config) -> Result<String, TomlSerError> {
    toml::to_string(config)
}
