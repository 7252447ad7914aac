//! Host page model: just enough of a DOM to carry embed elements and
//! receive rendered markup.

use std::collections::BTreeMap;

use crate::escape::escape;

/// Marks an element as eligible for discovery.
pub const EMBED_ATTR: &str = "data-dns-tool-embed";
pub const DOMAIN_ATTR: &str = "data-dns-domain";
/// Comma separated record types, e.g. `"A, AAAA, MX"`.
pub const TYPES_ATTR: &str = "data-dns-types";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
    inner_html: Option<String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            inner_html: None,
        }
    }

    /// A `div` carrying the three embed attributes.
    pub fn embed(domain: &str, types: &str) -> Self {
        Self::new("div")
            .with_attribute(EMBED_ATTR, "")
            .with_attribute(DOMAIN_ATTR, domain)
            .with_attribute(TYPES_ATTR, types)
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.inner_html = None;
        self.children.push(child);
    }

    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    /// Replaces all content, children included.
    pub fn set_inner_html(&mut self, html: String) {
        self.children.clear();
        self.inner_html = Some(html);
    }

    pub fn is_embed(&self) -> bool {
        [EMBED_ATTR, DOMAIN_ATTR, TYPES_ATTR]
            .iter()
            .all(|name| self.has_attribute(name))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// Embed elements below this one in document order. The content of an
    /// embed is its own and is not searched.
    pub fn embeds_mut(&mut self) -> Vec<&mut Element> {
        let mut found = Vec::new();
        self.collect_embeds(&mut found);
        found
    }

    fn collect_embeds<'a>(&'a mut self, found: &mut Vec<&'a mut Element>) {
        for child in self.children.iter_mut() {
            if child.is_embed() {
                found.push(child);
            } else {
                child.collect_embeds(found);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        for (name, value) in &self.attributes {
            html.push(' ');
            html.push_str(name);
            if !value.is_empty() {
                html.push_str("=\"");
                html.push_str(&escape(value));
                html.push('"');
            }
        }
        html.push('>');
        match &self.inner_html {
            Some(inner) => html.push_str(inner),
            None => self
                .children
                .iter()
                .for_each(|child| child.write_html(html)),
        }
        html.push_str("</");
        html.push_str(&self.tag);
        html.push('>');
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    body: Element,
}

impl Document {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: Element::new("body"),
        }
    }

    pub fn with_body(mut self, body: Element) -> Self {
        self.body = body;
        self
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>{}</html>\n",
            escape(&self.title),
            self.body.to_html()
        )
    }
}
