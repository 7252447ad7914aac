use std::collections::HashMap;

use dns::{CacheEntry, RecordType, Resolver};
use futures::future::join_all;
use log::{debug, info};

use crate::{
    model::{lookup_url, RenderModel, Section},
    page::{Element, DOMAIN_ATTR, EMBED_ATTR, TYPES_ATTR},
    render::{self, RenderOptions, CONTAINER_STYLE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// constructed, nothing rendered yet
    Idle,
    Fetching,
    Rendered,
}

/// Everything one widget knows. `results` only ever holds requested types,
/// and a type once fetched is only ever replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    domain: String,
    requested: Vec<RecordType>,
    results: HashMap<RecordType, CacheEntry>,
}

impl WidgetState {
    pub fn new(domain: &str, types: &str) -> Self {
        let mut requested = RecordType::parse_list(types);
        requested.sort_by_key(|t| t.priority());
        Self {
            domain: domain.to_string(),
            requested,
            results: HashMap::new(),
        }
    }

    /// Reads the embed attributes and removes them so a later scan skips
    /// the element.
    pub fn take_from(element: &mut Element) -> Self {
        element.remove_attribute(EMBED_ATTR);
        let domain = element.remove_attribute(DOMAIN_ATTR).unwrap_or_default();
        let types = element.remove_attribute(TYPES_ATTR).unwrap_or_default();
        Self::new(&domain, &types)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// In display priority order.
    pub fn requested(&self) -> &[RecordType] {
        &self.requested
    }

    pub fn result(&self, record_type: RecordType) -> Option<&CacheEntry> {
        self.results.get(&record_type)
    }

    fn model(&self, options: &RenderOptions) -> RenderModel {
        RenderModel {
            domain: self.domain.clone(),
            sections: self
                .requested
                .iter()
                .filter_map(|record_type| {
                    self.results.get(record_type).map(|entry| Section {
                        record_type: *record_type,
                        body: entry.result.clone().into(),
                        fetched_at: entry.fetched_at,
                    })
                })
                .collect(),
            lookup_url: lookup_url(&options.lookup_tool, &self.domain),
        }
    }
}

/// Drives fetch and render for the widget living in one host element.
pub struct EmbedController<'e> {
    element: &'e mut Element,
    resolver: Resolver,
    options: RenderOptions,
    state: WidgetState,
    phase: Phase,
}

impl<'e> EmbedController<'e> {
    pub fn new(element: &'e mut Element, resolver: Resolver, options: RenderOptions) -> Self {
        let state = WidgetState::take_from(element);
        Self {
            element,
            resolver,
            options,
            state,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn element(&self) -> &Element {
        &*self.element
    }

    pub fn model(&self) -> RenderModel {
        self.state.model(&self.options)
    }

    /// First render cycle, every requested type through the cache.
    pub async fn load(&mut self) {
        let types = self.state.requested.clone();
        self.run(types, false).await;
    }

    /// Fetches one type past the cache and re-renders. Other sections keep
    /// what they showed. Types the widget does not show are ignored.
    pub async fn refresh(&mut self, record_type: RecordType) {
        if !self.state.requested.contains(&record_type) {
            debug!(
                "{} -> {} is not requested, refresh ignored",
                self.state.domain, record_type
            );
            return;
        }
        info!("{} -> refresh {}", self.state.domain, record_type);
        self.run(vec![record_type], true).await;
    }

    /// One batch: all lookups start together and nothing is applied until
    /// the last one settles.
    async fn run(&mut self, types: Vec<RecordType>, bypass_cache: bool) {
        if self.state.domain.is_empty() {
            debug!("embed without domain, nothing to render");
            return;
        }
        self.phase = Phase::Fetching;

        let resolver = &self.resolver;
        let domain = self.state.domain.as_str();
        let entries = join_all(
            types
                .iter()
                .map(|record_type| resolver.fetch(domain, *record_type, bypass_cache)),
        )
        .await;

        self.state.results.extend(types.into_iter().zip(entries));
        self.render();
        self.phase = Phase::Rendered;
    }

    fn render(&mut self) {
        let html = render::html(&self.model(), &self.options);
        self.element.set_attribute("style", CONTAINER_STYLE);
        self.element.set_inner_html(html);
    }
}
