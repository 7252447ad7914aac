//! HTML for a [`RenderModel`].

use std::fmt::Write;

use dns::Record;
use once_cell::sync::Lazy;

use crate::{
    escape::escape,
    icons,
    model::{RenderModel, Section, SectionBody},
};

pub const DEFAULT_LOOKUP_TOOL: &str = "https://www.digitalocean.com/community/tools/dns";

pub const CONTAINER_STYLE: &str = "border:1px solid #e5e5e5;border-radius:3px;margin:16px 0;padding:10px";

const FETCHED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// "Last fetched" shows while its heading or itself is hovered.
const HOVER_RULES: &str = ".dns-embed-fetched{display:none}\
.dns-embed-section h5:hover+.dns-embed-fetched,.dns-embed-fetched:hover{display:block}";

static DEFAULT_LOOKUP_TOOL_URL: Lazy<dns::Url> =
    Lazy::new(|| dns::Url::parse(DEFAULT_LOOKUP_TOOL).unwrap());

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base of the "full DNS lookup" link, `?domain=` is appended.
    pub lookup_tool: dns::Url,
    pub refresh: bool,
    pub fetched: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lookup_tool: DEFAULT_LOOKUP_TOOL_URL.clone(),
            refresh: true,
            fetched: true,
        }
    }
}

pub fn html(model: &RenderModel, options: &RenderOptions) -> String {
    let domain = escape(&model.domain);
    let mut html = String::new();
    if options.fetched {
        let _ = write!(html, "<style>{}</style>", HOVER_RULES);
    }
    let _ = write!(
        html,
        "<h4 style=\"font-size:15px;margin:0 0 20px\">DNS lookup for {}</h4>",
        domain
    );
    for section in &model.sections {
        write_section(&mut html, section, options);
    }
    let _ = write!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" style=\"background:#0069ff;border:none;\
border-radius:3px;color:#fff;display:inline-block;font-size:14px;margin:15px 0 0;\
padding:4px 12px 6px;text-decoration:none\">Perform a full DNS lookup for {}{}</a>",
        escape(model.lookup_url.as_str()),
        domain,
        icons::EXTERNAL_LINK
    );
    html
}

fn write_section(html: &mut String, section: &Section, options: &RenderOptions) {
    let record_type = section.record_type.as_str();
    let _ = write!(
        html,
        "<div class=\"dns-embed-section\" data-dns-type=\"{0}\">\
<h5 style=\"font-size:15px;margin:10px 0 0\">{0} records",
        record_type
    );
    if options.refresh {
        let _ = write!(
            html,
            "<a data-dns-refresh=\"{0}\" role=\"button\" title=\"Refresh {0} records\" \
style=\"border:none;cursor:pointer;display:inline-block;margin:0 0 0 5px\">{1}</a>",
            record_type,
            icons::REFRESH
        );
    }
    html.push_str("</h5>");
    if options.fetched {
        let _ = write!(
            html,
            "<p class=\"dns-embed-fetched\" style=\"color:#333;font-size:11px;margin:0\">Last fetched {}</p>",
            section.fetched_at.format(FETCHED_FORMAT)
        );
    }
    match &section.body {
        SectionBody::Records(records) => write_table(html, records),
        SectionBody::Empty => write_note(html, "No records found"),
        SectionBody::Failure(failure) => write_note(html, &failure.to_string()),
    }
    html.push_str("</div>");
}

fn write_table(html: &mut String, records: &[Record]) {
    const TH: &str = "color:#666;font-size:13px;font-weight:normal;text-align:left;padding:2px 6px";
    const TD: &str = "border:solid #f1f1f1;border-width:2px 0 0;padding:2px 6px";
    const TD_LEFT: &str = "border:solid #f1f1f1;border-width:2px 0 0 2px;padding:2px 6px";

    let _ = write!(
        html,
        "<div style=\"overflow-x:auto;max-width:100%\">\
<table style=\"background:none;border:0;border-spacing:0;margin:5px 0;table-layout:unset\">\
<thead style=\"background:none\"><tr>\
<th style=\"{0}\">Name</th><th style=\"{0}\">TTL</th><th style=\"{0}\">Data</th>\
</tr></thead><tbody style=\"background:none\">",
        TH
    );
    for record in records {
        let _ = write!(
            html,
            "<tr><td style=\"{0}\">{2}</td><td style=\"{1}\">{3}</td><td style=\"{1}\">{4}</td></tr>",
            TD,
            TD_LEFT,
            escape(&record.name),
            record.ttl,
            escape(&record.data)
        );
    }
    html.push_str("</tbody></table></div>");
}

fn write_note(html: &mut String, text: &str) {
    let _ = write!(
        html,
        "<p style=\"color:#666;font-size:13px;margin:5px 6px 0\">{}</p>",
        escape(text)
    );
}
