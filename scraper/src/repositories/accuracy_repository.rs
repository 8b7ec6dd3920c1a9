use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::error::ScrapeError;
use crate::pipeline::RunStamp;
use crate::repositories::SignalSink;
use shared::entity::intraday_accuracy_signals::{self, Entity as AccuracySignals};

/// Append-only store for the "Intraday 100% Accuracy" feed.
pub struct AccuracySignalRepository {
    db: Arc<DatabaseConnection>,
}

impl AccuracySignalRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Field order follows the accuracy export: symbol, trade type, LTP,
    /// today's range, rank.
    pub fn record(
        stamp: &RunStamp,
        fields: &[String],
    ) -> intraday_accuracy_signals::ActiveModel {
        intraday_accuracy_signals::ActiveModel {
            screener_run_id: Set(Some(stamp.run_id.clone())),
            screener_date: Set(Some(stamp.run_date)),
            screener_type: Set(Some("Intraday_Accuracy".to_string())),
            screener: Set(Some("Intraday_Accuracy".to_string())),
            stock_name: Set(fields.first().cloned()),
            trade_type: Set(fields.get(1).cloned()),
            ltp: Set(fields.get(2).cloned()),
            todays_range: Set(fields.get(3).cloned()),
            screener_rank: Set(fields.get(4).cloned()),
            ..Default::default()
        }
    }

    pub async fn insert(
        &self,
        model: intraday_accuracy_signals::ActiveModel,
    ) -> Result<intraday_accuracy_signals::Model, ScrapeError> {
        let row = AccuracySignals::insert(model)
            .exec_with_returning(self.db.as_ref())
            .await?;
        Ok(row)
    }

    pub async fn get_by_run_id(
        &self,
        run_id: &str,
    ) -> Result<Vec<intraday_accuracy_signals::Model>, ScrapeError> {
        if run_id.trim().is_empty() {
            return Err(ScrapeError::MissingQueryParam("screener_run_id"));
        }
        let rows = AccuracySignals::find()
            .filter(intraday_accuracy_signals::Column::ScreenerRunId.eq(run_id))
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    pub async fn get_by_date(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<intraday_accuracy_signals::Model>, ScrapeError> {
        let date = date.ok_or(ScrapeError::MissingQueryParam("screener_date"))?;
        let rows = AccuracySignals::find()
            .filter(intraday_accuracy_signals::Column::ScreenerDate.eq(date))
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl SignalSink for AccuracySignalRepository {
    async fn insert_row(
        &self,
        stamp: &RunStamp,
        _seq: u32,
        fields: &[String],
    ) -> Result<(), ScrapeError> {
        self.insert(Self::record(stamp, fields)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_the_batch_stamp() {
        let stamp = RunStamp {
            run_id: "batch-7".to_string(),
            run_date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
        };
        let fields: Vec<String> = ["TCS", "Short Buildup", "4,102.00", "4,080 - 4,130", "1"]
            .iter()
            .map(|f| f.to_string())
            .collect();

        let model = AccuracySignalRepository::record(&stamp, &fields);
        assert_eq!(model.screener_run_id.clone().unwrap(), Some("batch-7".to_string()));
        assert_eq!(model.screener_date.clone().unwrap(), Some(stamp.run_date));
        assert_eq!(model.screener_type.clone().unwrap(), Some("Intraday_Accuracy".to_string()));
        assert_eq!(model.stock_name.clone().unwrap(), Some("TCS".to_string()));
    }
}
