//! Embeddable DNS lookup widgets.
//!
//! Each host element carrying `data-dns-tool-embed`, `data-dns-domain` and
//! `data-dns-types` gets an [`EmbedController`] which fetches its record
//! types through a shared [`dns::Resolver`] and renders the result into the
//! element. [`embed_all`] does this for a whole document.

mod bootstrap;
mod escape;
mod icons;
pub mod controller;
pub mod model;
pub mod page;
pub mod render;

#[cfg(test)]
mod testing;

pub use bootstrap::embed_all;
pub use controller::{EmbedController, Phase, WidgetState};
pub use model::{RenderModel, Section, SectionBody};
pub use page::{Document, Element};
pub use render::RenderOptions;
