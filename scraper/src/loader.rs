//! CSV export loading. Reads the whole file into memory (a few hundred
//! rows at most) and deletes it only after a successful read, so a failed
//! parse leaves the file behind for inspection.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ScrapeError;

/// Returns every row of the file, header first. No column validation
/// happens here; that is the mapping layer's job.
pub fn read_csv_and_delete(path: &Path) -> Result<Vec<Vec<String>>, ScrapeError> {
    if !path.exists() {
        return Err(ScrapeError::ExportFileMissing {
            path: path.to_path_buf(),
        });
    }

    info!("Reading {}", path.display());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    info!("Read {} rows, deleting {}", rows.len(), path.display());
    fs::remove_file(path)?;
    Ok(rows)
}
