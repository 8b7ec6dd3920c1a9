mod accuracy_repository;
mod alert_repository;
mod momentum_repository;

pub use accuracy_repository::AccuracySignalRepository;
pub use alert_repository::AlertSignalRepository;
pub use momentum_repository::MomentumSignalRepository;

use crate::error::ScrapeError;
use crate::pipeline::RunStamp;

/// Destination for mapped signal rows; one implementation per screener
/// table. `seq` is the 1-based position of the row within its batch.
#[async_trait::async_trait]
pub trait SignalSink: Send + Sync {
    async fn insert_row(
        &self,
        stamp: &RunStamp,
        seq: u32,
        fields: &[String],
    ) -> Result<(), ScrapeError>;
}
