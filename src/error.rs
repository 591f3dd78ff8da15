use thiserror::Error;

/// Errors that abort processing of a single season.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A placement token that is neither the absent sentinel nor an integer.
    /// Never coerced; the whole season is rejected.
    #[error("column {column}: cannot rank placement token {token:?}")]
    DataFormat { column: String, token: String },

    /// The standings page did not have the header/row/cell structure the
    /// parser relies on.
    #[error("unexpected markup: {0}")]
    MarkupStructure(String),

    /// The standings page for a season could not be retrieved.
    #[error("fetch failed for season {year}: {reason}")]
    Fetch { year: u16, reason: String },
}
