use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use scraper::exporter::Exporter;
use scraper::pipeline::run_batch;
use scraper::repositories::{
    AccuracySignalRepository, AlertSignalRepository, MomentumSignalRepository, SignalSink,
};
use scraper::screener::{ScreenerDef, ACCURACY, ALERTS, MOMENTUM};
use shared::{close_db_connection, get_db_connection, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting screener signal ingest...");

    let config = Config::from_env()?;
    let db = Arc::new(get_db_connection(&config.database_url).await?);
    let exporter = Exporter::new(&config);

    let batches: Vec<(&ScreenerDef, Box<dyn SignalSink>)> = vec![
        (&ALERTS, Box::new(AlertSignalRepository::new(db.clone()))),
        (&ACCURACY, Box::new(AccuracySignalRepository::new(db.clone()))),
        (&MOMENTUM, Box::new(MomentumSignalRepository::new(db.clone()))),
    ];

    let mut failed = 0usize;
    for (def, sink) in &batches {
        match run_batch(def, &exporter, sink.as_ref()).await {
            Ok(outcome) => info!("{}: {} rows ingested", def.screener_type, outcome.inserted),
            Err(err) => {
                error!("{} batch failed: {}", def.screener_type, err);
                failed += 1;
            }
        }
    }

    drop(batches);
    close_db_connection(db).await?;

    if failed > 0 {
        anyhow::bail!("{failed} screener batch(es) failed");
    }
    info!("All screener batches completed");
    Ok(())
}
