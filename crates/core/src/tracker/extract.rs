//! Best-effort status extraction from the case-status HTML page.
//!
//! The page is an uncontrolled third party: layout drift, error pages and
//! truncated bodies must never crash a run. Extraction is therefore a total
//! function that degrades to an empty [`CaseStatus`] whenever the expected
//! structure is absent.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use scraper::{Html, Selector};

use super::types::CaseStatus;

/// The element carrying the current-status heading.
static STATUS_SECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.current-status-sec").unwrap());

/// The element carrying the supplementary case detail text.
static INFO_SECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.rows.text-center").unwrap());

/// The status phrase sits between a colon and a trailing plus sign in the
/// flattened section text.
static STATUS_PHRASE: Lazy<Regex> = Lazy::new(|| Regex::new(r":.+\+").unwrap());

/// Extract `(status, info)` from a raw case-status page.
///
/// Total: any structural failure yields `CaseStatus::default()` rather than
/// an error. A present status section with an unmatched phrase yields an
/// empty `status` but still carries `info`.
pub fn extract_status(document: &str) -> CaseStatus {
    try_extract(document).unwrap_or_default()
}

/// The fallible path, `None` when either structural region is missing.
fn try_extract(document: &str) -> Option<CaseStatus> {
    let html = Html::parse_document(document);

    let section = html.select(&STATUS_SECTION).next()?;
    let text: String = section.text().collect();
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    let status = STATUS_PHRASE
        .find(&text)
        .map(|m| {
            // Drop the colon and plus boundary markers.
            let inner = &m.as_str()[1..m.as_str().len() - 1];
            inner.trim().to_string()
        })
        .unwrap_or_default();

    let info_section = html.select(&INFO_SECTION).next()?;
    let info = info_section.text().collect::<String>().trim().to_string();

    Some(CaseStatus { status, info })
}
