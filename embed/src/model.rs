use chrono::{DateTime, Local};
use dns::{LookupFailure, LookupResult, Record, RecordType, Url};

/// What one record type section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Records(Vec<Record>),
    Empty,
    Failure(LookupFailure),
}

impl From<LookupResult> for SectionBody {
    fn from(result: LookupResult) -> Self {
        match result {
            Ok(records) if records.is_empty() => SectionBody::Empty,
            Ok(records) => SectionBody::Records(records),
            Err(failure) => SectionBody::Failure(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub record_type: RecordType,
    pub body: SectionBody,
    pub fetched_at: DateTime<Local>,
}

/// Immutable snapshot of a widget, consumed by [`crate::render::html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub domain: String,
    /// in [`RecordType::PRIORITY`] order
    pub sections: Vec<Section>,
    pub lookup_url: Url,
}

impl RenderModel {
    pub fn section(&self, record_type: RecordType) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.record_type == record_type)
    }

    pub fn record_types(&self) -> Vec<RecordType> {
        self.sections.iter().map(|s| s.record_type).collect()
    }
}

/// Link to the full lookup tool, `domain` query-encoded.
pub fn lookup_url(base: &Url, domain: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("domain", domain);
    url
}
