use crate::error::ScrapeError;
use crate::process::selector;
use scraper::{ElementRef, Html};

pub const NAME_HEADER: &str = "Name";

/// Auxiliary columns of the source table that carry no placement data.
const TOTAL_POINTS_HEADER: &str = "Total Points";

/// Seasons with a season-ending finals stage add this column plus summary
/// rows marking qualification cut lines; neither is an athlete placement.
const FINALS_HEADER: &str = "WSL Finals";
const FINALS_SUMMARY_ROWS: &[&str] = &[
    "Final 5 Cutoff",
    "CT Requalification Line",
    "Mid-Season Cut Line",
];

/// One season's standings table as scraped: untyped string cells, the
/// "Name" column first, one column per event in source order.
#[derive(Debug)]
pub struct RawTable {
    /// Column names from the second header row of the source table.
    pub headers: Vec<String>,
    /// One entry per athlete row, same arity as `headers`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// All cell values of one column, in row order.
    pub fn column_values(&self, idx: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect()
    }

    /// Drop the finals column and its cut-line summary rows, if present.
    /// Must run before placement normalization: the summary rows would
    /// pollute every column's distinct-value rank table.
    pub fn strip_finals_summary(&mut self) {
        let Some(col) = self.headers.iter().position(|h| h == FINALS_HEADER) else {
            return;
        };
        self.rows.retain(|row| {
            row.first()
                .map_or(true, |name| !FINALS_SUMMARY_ROWS.contains(&name.as_str()))
        });
        self.headers.remove(col);
        for row in &mut self.rows {
            if col < row.len() {
                row.remove(col);
            }
        }
    }
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extract the standings table from a season page.
///
/// The source table uses a two-row header; the second row names the
/// columns. Everything before the "Name" column (rank, photo and flag
/// cells) and the running points total are dropped here, leaving the name
/// plus one column per event.
pub fn parse_results_table(html: &str) -> Result<RawTable, ScrapeError> {
    let table_sel = selector("table");
    let head_row_sel = selector("thead tr");
    let body_row_sel = selector("tbody tr");
    let cell_sel = selector("th, td");

    let doc = Html::parse_document(html);
    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| ScrapeError::MarkupStructure("page has no standings table".into()))?;

    let header_row = table.select(&head_row_sel).nth(1).ok_or_else(|| {
        ScrapeError::MarkupStructure("standings table has no second header row".into())
    })?;
    let all_headers: Vec<String> = header_row.select(&cell_sel).map(cell_text).collect();
    let name_idx = all_headers
        .iter()
        .position(|h| h == NAME_HEADER)
        .ok_or_else(|| {
            ScrapeError::MarkupStructure("header row has no Name column".into())
        })?;

    let keep: Vec<usize> = (name_idx..all_headers.len())
        .filter(|&i| all_headers[i] != TOTAL_POINTS_HEADER)
        .collect();
    let headers: Vec<String> = keep.iter().map(|&i| all_headers[i].clone()).collect();

    let mut rows = Vec::new();
    for row in table.select(&body_row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
        if cells.len() != all_headers.len() {
            return Err(ScrapeError::MarkupStructure(format!(
                "standings row has {} cells, expected {}",
                cells.len(),
                all_headers.len()
            )));
        }
        rows.push(keep.iter().map(|&i| cells[i].clone()).collect());
    }

    Ok(RawTable { headers, rows })
}
