use std::{fmt, str::FromStr};

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// DNS record types a widget may ask for.
///
/// Declaration order is display priority, see [`RecordType::PRIORITY`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    CAA,
    CNAME,
    MX,
    NS,
    SOA,
    SRV,
    TXT,
}

impl RecordType {
    /// Order in which sections are displayed, independent of request or
    /// completion order.
    pub const PRIORITY: [RecordType; 9] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CAA,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::NS,
        RecordType::SOA,
        RecordType::SRV,
        RecordType::TXT,
    ];

    /// Mnemonic as sent in the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position of this type in [`RecordType::PRIORITY`].
    pub fn priority(self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|t| *t == self)
            .unwrap_or(Self::PRIORITY.len())
    }

    /// Parses a comma separated list, trimming entries and dropping the
    /// ones that are not supported. Duplicates keep their first position.
    pub fn parse_list(list: &str) -> Vec<RecordType> {
        let mut types = Vec::new();
        for record_type in list
            .split(',')
            .filter_map(|t| RecordType::from_str(t.trim()).ok())
        {
            if !types.contains(&record_type) {
                types.push(record_type);
            }
        }
        types
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    domain: String,
    record_type: RecordType,
}

impl LookupKey {
    pub fn new(domain: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.record_type)
    }
}

/// One answer echoed from the resolver, fields kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub ttl: u32,
    pub data: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// no response, or a non-success HTTP status
    #[error("Failed to make DNS request")]
    RequestFailed,
    /// body is not JSON, or `Status` is missing or non-zero
    #[error("Failed to parse DNS response")]
    ParseFailed,
}

/// `Ok(vec![])` is a valid answer with no records, not a failure.
pub type LookupResult = Result<Vec<Record>, LookupFailure>;
