use crate::error::ScrapeError;
use crate::process::{selector, table::NAME_HEADER};
use scraper::Html;

/// Venue rules tried in priority order against the lower-cased header;
/// the first pattern hit maps the header to its canonical id.
const CANONICAL_EVENTS: &[(&[&str], &str)] = &[
    (&["portugal"], "portugal"),
    (&["j-bay"], "j-bay"),
    (&["fiji"], "fiji"),
    (&["trestles"], "trestles"),
    (&["rio"], "rio"),
    (&["bali"], "bali"),
    (&["margaret"], "margaret-river"),
    (&["teahupoo", "tahiti"], "teahupoo"),
];

const SPONSOR_MARKER: &str = "-presented-by-";

/// Map a resolved event header to its canonical venue id. Headers that
/// match no rule pass through unchanged, case preserved.
pub fn canonicalize_event(header: &str) -> String {
    let lowered = header.to_lowercase();
    for (patterns, canonical) in CANONICAL_EVENTS {
        if patterns.iter().any(|p| lowered.contains(p)) {
            return (*canonical).to_string();
        }
    }
    header.to_string()
}

/// Derive the event-name header row from the tooltip annotations on the
/// standings table's event columns.
///
/// Returns `column_count` names with the literal "Name" first. Any missing
/// piece of the expected structure, or a resolved count that disagrees with
/// the table's column count, fails the season.
pub fn resolve_event_headers(html: &str, column_count: usize) -> Result<Vec<String>, ScrapeError> {
    let row_sel = selector("thead tr.last");
    let cell_sel = selector("th.athlete-event-place");
    let tooltip_sel = selector("span.tooltip-item");

    let doc = Html::parse_document(html);
    let header_row = doc.select(&row_sel).next().ok_or_else(|| {
        ScrapeError::MarkupStructure("standings table has no tr.last header row".into())
    })?;

    let mut headers = vec![NAME_HEADER.to_string()];
    for cell in header_row.select(&cell_sel) {
        let tooltip = cell
            .select(&tooltip_sel)
            .next()
            .and_then(|span| span.value().attr("data-tooltip"))
            .ok_or_else(|| {
                ScrapeError::MarkupStructure(format!(
                    "event column {} has no tooltip annotation",
                    headers.len()
                ))
            })?;
        headers.push(event_slug(tooltip)?);
    }

    if headers.len() != column_count {
        return Err(ScrapeError::MarkupStructure(format!(
            "resolved {} event headers for a table with {} columns",
            headers.len(),
            column_count
        )));
    }
    Ok(headers)
}

/// Pull the event slug out of a tooltip payload: third-from-last path
/// segment, cut at the first backslash, cut before any sponsor suffix.
fn event_slug(tooltip: &str) -> Result<String, ScrapeError> {
    let segments: Vec<&str> = tooltip.split('/').collect();
    if segments.len() < 3 {
        return Err(ScrapeError::MarkupStructure(format!(
            "tooltip {tooltip:?} has no event path segment"
        )));
    }
    let raw = segments[segments.len() - 3];
    let slug = raw.split('\\').next().unwrap_or(raw);
    let slug = match slug.find(SPONSOR_MARKER) {
        Some(idx) => &slug[..idx],
        None => slug,
    };
    Ok(slug.to_string())
}
