pub mod events;
pub mod names;
pub mod placements;
pub mod table;

pub use placements::RankValue;
pub use table::{parse_results_table, RawTable};

use crate::error::ScrapeError;
use scraper::Selector;

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("CSS selector should be valid")
}

/// One season's results after normalization: canonical headers, clean
/// athlete names, dense ranks. Column order matches the source table.
#[derive(Debug)]
pub struct CleanTable {
    pub headers: Vec<String>,
    pub rows: Vec<CleanRow>,
}

#[derive(Debug)]
pub struct CleanRow {
    pub name: String,
    pub placements: Vec<RankValue>,
}

/// Run the whole cleaning pipeline over one season page.
///
/// Stages, in order: extract the raw table, drop the finals summary,
/// normalize athlete names, rank every event column, resolve the header
/// row from tooltips, canonicalize event names. Any stage failure rejects
/// the season; nothing partial escapes.
pub fn clean_season_table(html: &str) -> Result<CleanTable, ScrapeError> {
    let mut raw = table::parse_results_table(html)?;
    raw.strip_finals_summary();

    let names: Vec<String> = raw
        .rows
        .iter()
        .map(|row| names::normalize_name(row.first().map(String::as_str).unwrap_or_default()))
        .collect();

    let mut columns: Vec<Vec<RankValue>> = Vec::with_capacity(raw.column_count().saturating_sub(1));
    for idx in 1..raw.column_count() {
        let values = raw.column_values(idx);
        columns.push(placements::normalize_column(&raw.headers[idx], &values)?);
    }

    let resolved = events::resolve_event_headers(html, raw.column_count())?;
    let headers: Vec<String> = resolved
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == 0 {
                header.clone()
            } else {
                events::canonicalize_event(header)
            }
        })
        .collect();

    let rows = names
        .into_iter()
        .enumerate()
        .map(|(row_idx, name)| CleanRow {
            name,
            placements: columns
                .iter()
                .map(|col| col.get(row_idx).copied().flatten())
                .collect(),
        })
        .collect();

    Ok(CleanTable { headers, rows })
}
