use std::path::PathBuf;

/// Everything that can go wrong between opening the browser and the last
/// row landing in its table.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("browser launch failed: {0}")]
    LaunchFailed(String),

    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("export control not found on screener page")]
    ExportControlNotFound,

    #[error("export file missing: {}", path.display())]
    ExportFileMissing { path: PathBuf },

    #[error("column '{column}' missing from export header")]
    SchemaMismatch { column: String },

    #[error("row {row} has {got} fields, expected at least {want}")]
    ShortRow { row: usize, got: usize, want: usize },

    #[error("missing query parameter: {0}")]
    MissingQueryParam(&'static str),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Browser(#[from] chromiumoxide::error::CdpError),
}
