//! Batch-driver behavior against an in-memory sink: positional fidelity,
//! shared run stamps, and abort-on-first-failure semantics.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use scraper::error::ScrapeError;
use scraper::exporter::ExportSource;
use scraper::pipeline::{ingest_rows, run_batch, RunStamp};
use scraper::repositories::SignalSink;
use scraper::screener::{ScreenerDef, ACCURACY, MOMENTUM};

fn strs(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn stamp() -> RunStamp {
    RunStamp {
        run_id: "e2e-run".to_string(),
        run_date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
    }
}

#[derive(Default)]
struct CapturingSink {
    rows: Mutex<Vec<(String, NaiveDate, u32, Vec<String>)>>,
}

#[async_trait]
impl SignalSink for CapturingSink {
    async fn insert_row(
        &self,
        stamp: &RunStamp,
        seq: u32,
        fields: &[String],
    ) -> Result<(), ScrapeError> {
        self.rows
            .lock()
            .unwrap()
            .push((stamp.run_id.clone(), stamp.run_date, seq, fields.to_vec()));
        Ok(())
    }
}

/// Fails on the nth call; earlier inserts are recorded.
struct FlakySink {
    fail_on: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl SignalSink for FlakySink {
    async fn insert_row(
        &self,
        _stamp: &RunStamp,
        _seq: u32,
        _fields: &[String],
    ) -> Result<(), ScrapeError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call >= self.fail_on {
            return Err(ScrapeError::Db(sea_orm::DbErr::Custom(
                "simulated insert failure".to_string(),
            )));
        }
        Ok(())
    }
}

/// Export that never delivered a file, as after a silent download failure.
struct MissingExport;

#[async_trait]
impl ExportSource for MissingExport {
    async fn export(&self, def: &ScreenerDef) -> Result<PathBuf, ScrapeError> {
        Err(ScrapeError::ExportFileMissing {
            path: PathBuf::from(def.export_file),
        })
    }
}

/// File-backed export source: writes a canned CSV where the browser would
/// have downloaded one.
struct FileExport {
    dir: tempfile::TempDir,
    body: &'static str,
}

#[async_trait]
impl ExportSource for FileExport {
    async fn export(&self, def: &ScreenerDef) -> Result<PathBuf, ScrapeError> {
        let path = self.dir.path().join(def.export_file);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(self.body.as_bytes())?;
        Ok(path)
    }
}

#[tokio::test]
async fn missing_export_file_ends_the_batch_empty_without_failing() {
    let sink = CapturingSink::default();

    let outcome = run_batch(&ACCURACY, &MissingExport, &sink).await.unwrap();
    assert_eq!(outcome.inserted, 0);
    assert!(sink.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn file_backed_batch_ingests_every_data_row_and_deletes_the_file() {
    let export = FileExport {
        dir: tempfile::tempdir().unwrap(),
        body: "Symbol,Trade Type,LTP,Today's Range,Rank\n\
               RELIANCE,Long Buildup,\"2,945.10\",\"2,901 - 2,958\",1\n\
               TCS,Short Buildup,\"4,102.00\",\"4,080 - 4,130\",2\n",
    };
    let sink = CapturingSink::default();

    let outcome = run_batch(&ACCURACY, &export, &sink).await.unwrap();
    assert_eq!(outcome.inserted, 2);
    assert!(!export.dir.path().join(ACCURACY.export_file).exists());

    let captured = sink.rows.lock().unwrap();
    let (run_id, run_date, _, _) = &captured[0];
    assert!(captured
        .iter()
        .all(|(id, date, _, _)| id == run_id && date == run_date));
}

#[tokio::test]
async fn accuracy_batch_persists_two_rows_with_shared_stamp() {
    let rows = vec![
        strs(&["Symbol", "Trade Type", "LTP", "Today's Range", "Rank"]),
        strs(&["RELIANCE", "Long Buildup", "2,945.10", "2,901 - 2,958", "1"]),
        strs(&["TCS", "Short Buildup", "4,102.00", "4,080 - 4,130", "2"]),
    ];
    let sink = CapturingSink::default();

    let outcome = ingest_rows(&ACCURACY, &stamp(), &rows, &sink).await.unwrap();
    assert_eq!(outcome.inserted, 2);

    let captured = sink.rows.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured
        .iter()
        .all(|(run_id, run_date, _, _)| run_id == "e2e-run"
            && *run_date == NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()));
    assert_eq!(
        captured[0].3,
        strs(&["RELIANCE", "Long Buildup", "2,945.10", "2,901 - 2,958", "1"])
    );
    assert_eq!(
        captured[1].3,
        strs(&["TCS", "Short Buildup", "4,102.00", "4,080 - 4,130", "2"])
    );
    assert_eq!(captured[0].2, 1);
    assert_eq!(captured[1].2, 2);
}

#[tokio::test]
async fn header_only_export_inserts_nothing() {
    let rows = vec![strs(&["Symbol", "Trade Type", "LTP", "Today's Range", "Rank"])];
    let sink = CapturingSink::default();

    let outcome = ingest_rows(&ACCURACY, &stamp(), &rows, &sink).await.unwrap();
    assert_eq!(outcome.inserted, 0);
    assert!(sink.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_export_inserts_nothing() {
    let sink = CapturingSink::default();
    let outcome = ingest_rows(&ACCURACY, &stamp(), &[], &sink).await.unwrap();
    assert_eq!(outcome.inserted, 0);
}

#[tokio::test]
async fn unexpected_header_aborts_before_any_insert() {
    let rows = vec![
        strs(&["Ticker", "Direction", "Price", "Range", "Rank"]),
        strs(&["RELIANCE", "Long", "2,945.10", "2,901 - 2,958", "1"]),
    ];
    let sink = CapturingSink::default();

    let err = ingest_rows(&ACCURACY, &stamp(), &rows, &sink).await.unwrap_err();
    assert!(matches!(err, ScrapeError::SchemaMismatch { .. }));
    assert!(sink.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn insert_failure_aborts_remaining_rows_but_keeps_earlier_ones() {
    let rows = vec![
        strs(&["Symbol", "Trade Type", "LTP", "Today's Range", "Rank"]),
        strs(&["RELIANCE", "Long", "2,945.10", "2,901 - 2,958", "1"]),
        strs(&["TCS", "Short", "4,102.00", "4,080 - 4,130", "2"]),
        strs(&["INFY", "Long", "1,540.25", "1,520 - 1,560", "3"]),
    ];
    let sink = FlakySink {
        fail_on: 2,
        calls: AtomicUsize::new(0),
    };

    let err = ingest_rows(&ACCURACY, &stamp(), &rows, &sink).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Db(_)));
    // the first row was inserted before the failure, the third never was
    assert_eq!(sink.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn momentum_rows_carry_twelve_fields() {
    let rows = vec![
        strs(&[
            "Symbol",
            "Trade Type",
            "LTP",
            "Volume Change",
            "Volume Ratio",
            "Momentum Rank",
            "52 Week High",
            "52 Week Low",
            "21 EMA %",
            "VWAP %",
            "RSI",
            "ADX",
        ]),
        strs(&[
            "HDFCBANK", "Long", "1,705.40", "+182%", "2.5x", "4", "1,794.00", "1,363.55",
            "1.2%", "0.8%", "68.4", "31.2",
        ]),
    ];
    let sink = CapturingSink::default();

    let outcome = ingest_rows(&MOMENTUM, &stamp(), &rows, &sink).await.unwrap();
    assert_eq!(outcome.inserted, 1);
    let captured = sink.rows.lock().unwrap();
    assert_eq!(captured[0].3.len(), 12);
    assert_eq!(captured[0].3[0], "HDFCBANK");
    assert_eq!(captured[0].3[11], "31.2");
}
