/// Spreadsheet boundary
pub mod columns;
pub mod google;
pub mod range;

use thiserror::Error;

pub use columns::ColumnMapping;
pub use google::GoogleSheets;

/// One spreadsheet row, as formatted cell strings. Trailing empty
/// cells may be omitted by the service.
pub type Row = Vec<String>;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("spreadsheet request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("spreadsheet service returned HTTP {status}: {body}")]
    Service { status: u16, body: String },
}

/// The two operations the sync needs from a spreadsheet. Ranges use
/// `Sheet!A1:B2` notation (see [`range`]).
pub trait SheetService {
    /// Fetch the rows in `range`; an empty vec means zero rows.
    fn get(&self, range: &str) -> Result<Vec<Row>, SheetError>;

    /// Overwrite `range` with `rows`, returning the updated-row count.
    fn update(&self, range: &str, rows: &[Row]) -> Result<usize, SheetError>;
}
