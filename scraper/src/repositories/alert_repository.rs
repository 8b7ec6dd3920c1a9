use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::error::ScrapeError;
use crate::pipeline::RunStamp;
use crate::repositories::SignalSink;
use shared::entity::intraday_alert_signals::{self, Entity as AlertSignals};

/// Append-only store for the intraday stock-alerts feed. No update or
/// delete operations exist; retention is a DB-administration concern.
pub struct AlertSignalRepository {
    db: Arc<DatabaseConnection>,
}

impl AlertSignalRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Field order follows the alerts export: symbol, trade type, LTP,
    /// today's range, rank.
    pub fn record(
        stamp: &RunStamp,
        fields: &[String],
    ) -> intraday_alert_signals::ActiveModel {
        intraday_alert_signals::ActiveModel {
            screener_run_id: Set(Some(stamp.run_id.clone())),
            screener_date: Set(Some(stamp.run_date)),
            screener_type: Set(Some("Intraday_Alerts".to_string())),
            screener: Set(Some("Intraday_Alerts".to_string())),
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
        model: intraday_alert_signals::ActiveModel,
    ) -> Result<intraday_alert_signals::Model, ScrapeError> {
        let row = AlertSignals::insert(model)
            .exec_with_returning(self.db.as_ref())
            .await?;
        Ok(row)
    }

    pub async fn get_by_run_id(
        &self,
        run_id: &str,
    ) -> Result<Vec<intraday_alert_signals::Model>, ScrapeError> {
        if run_id.trim().is_empty() {
            return Err(ScrapeError::MissingQueryParam("screener_run_id"));
        }
        let rows = AlertSignals::find()
            .filter(intraday_alert_signals::Column::ScreenerRunId.eq(run_id))
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    pub async fn get_by_date(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<intraday_alert_signals::Model>, ScrapeError> {
        let date = date.ok_or(ScrapeError::MissingQueryParam("screener_date"))?;
        let rows = AlertSignals::find()
            .filter(intraday_alert_signals::Column::ScreenerDate.eq(date))
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl SignalSink for AlertSignalRepository {
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
