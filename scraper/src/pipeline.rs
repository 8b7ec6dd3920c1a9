//! The batch driver: one export, one load, one insert per data row. All
//! three screeners run through this with their own definition and sink.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ScrapeError;
use crate::exporter::ExportSource;
use crate::loader;
use crate::repositories::SignalSink;
use crate::screener::{resolve_header, ScreenerDef};

/// Batch-scoped identifiers stamped onto every record of one export. One
/// UUID per batch; the date is the run's 10-minute bucket in IST.
#[derive(Debug, Clone)]
pub struct RunStamp {
    pub run_id: String,
    pub run_date: NaiveDate,
}

impl RunStamp {
    pub fn generate() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            run_date: shared::time::run_date_bucket(shared::time::now_ist()),
        }
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub inserted: usize,
}

/// Run one screener's batch end to end. A missing export file ends the
/// batch as an empty run; every other failure propagates to the caller.
pub async fn run_batch(
    def: &ScreenerDef,
    exporter: &dyn ExportSource,
    sink: &dyn SignalSink,
) -> Result<BatchOutcome, ScrapeError> {
    let stamp = RunStamp::generate();
    info!("Starting {} batch (run {})", def.screener_type, stamp.run_id);

    let loaded = match exporter.export(def).await {
        Ok(path) => loader::read_csv_and_delete(&path),
        Err(err) => Err(err),
    };
    let rows = match loaded {
        Ok(rows) => rows,
        Err(ScrapeError::ExportFileMissing { path }) => {
            warn!(
                "No export file at {}; skipping {} batch",
                path.display(),
                def.screener_type
            );
            return Ok(BatchOutcome { inserted: 0 });
        }
        Err(err) => return Err(err),
    };

    ingest_rows(def, &stamp, &rows, sink).await
}

/// Map and insert every data row, skipping the header. The first mapping
/// or insert failure aborts the remaining rows; rows already inserted stay
/// (append-only, no batch rollback).
pub async fn ingest_rows(
    def: &ScreenerDef,
    stamp: &RunStamp,
    rows: &[Vec<String>],
    sink: &dyn SignalSink,
) -> Result<BatchOutcome, ScrapeError> {
    let Some((header, data)) = rows.split_first() else {
        info!("{} export was empty", def.screener_type);
        return Ok(BatchOutcome { inserted: 0 });
    };

    let index = resolve_header(def, header)?;

    let mut inserted = 0;
    for (i, row) in data.iter().enumerate() {
        let seq = (i + 1) as u32;
        let fields = index.extract(row, seq as usize)?;
        sink.insert_row(stamp, seq, &fields).await?;
        inserted += 1;
    }

    info!("Logged {} {} rows", inserted, def.screener_type);
    Ok(BatchOutcome { inserted })
}
