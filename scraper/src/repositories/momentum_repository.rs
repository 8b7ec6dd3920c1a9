use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::error::ScrapeError;
use crate::pipeline::RunStamp;
use crate::repositories::SignalSink;
use crate::screener::strip_symbols;
use shared::entity::intraday_momentum_signals::{self, Entity as MomentumSignals};

/// Append-only store for the intraday momentum feed.
pub struct MomentumSignalRepository {
    db: Arc<DatabaseConnection>,
}

impl MomentumSignalRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Field order follows the momentum export: symbol, trade type, LTP,
    /// volume change, volume ratio, momentum rank, 52-week high/low,
    /// 21-EMA %, VWAP %, RSI, ADX. The volume-ratio field is stripped of
    /// the site's decorations; the feed has no rank column of its own, so
    /// the batch sequence number fills `screener_rank`.
    pub fn record(
        stamp: &RunStamp,
        seq: u32,
        fields: &[String],
    ) -> intraday_momentum_signals::ActiveModel {
        intraday_momentum_signals::ActiveModel {
            screener_run_id: Set(Some(stamp.run_id.clone())),
            screener_date: Set(Some(stamp.run_date)),
            screener_type: Set(Some("Momentum".to_string())),
            screener: Set(Some("Momentum".to_string())),
            stock_name: Set(fields.first().cloned()),
            trade_type: Set(fields.get(1).cloned()),
            ltp: Set(fields.get(2).cloned()),
            vol_change: Set(fields.get(3).cloned()),
            vol_ratio: Set(fields.get(4).map(|v| strip_symbols(v))),
            momentum_rank: Set(fields.get(5).cloned()),
            fiftytwo_week_high: Set(fields.get(6).cloned()),
            fiftytwo_week_low: Set(fields.get(7).cloned()),
            twentyone_ema_pct: Set(fields.get(8).cloned()),
            vwap_pct: Set(fields.get(9).cloned()),
            rsi_5min: Set(fields.get(10).cloned()),
            adx_5min: Set(fields.get(11).cloned()),
            screener_rank: Set(Some(seq.to_string())),
            ..Default::default()
        }
    }

    pub async fn insert(
        &self,
        model: intraday_momentum_signals::ActiveModel,
    ) -> Result<intraday_momentum_signals::Model, ScrapeError> {
        let row = MomentumSignals::insert(model)
            .exec_with_returning(self.db.as_ref())
            .await?;
        Ok(row)
    }

    pub async fn get_by_run_id(
        &self,
        run_id: &str,
    ) -> Result<Vec<intraday_momentum_signals::Model>, ScrapeError> {
        if run_id.trim().is_empty() {
            return Err(ScrapeError::MissingQueryParam("screener_run_id"));
        }
        let rows = MomentumSignals::find()
            .filter(intraday_momentum_signals::Column::ScreenerRunId.eq(run_id))
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    pub async fn get_by_date(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<intraday_momentum_signals::Model>, ScrapeError> {
        let date = date.ok_or(ScrapeError::MissingQueryParam("screener_date"))?;
        let rows = MomentumSignals::find()
            .filter(intraday_momentum_signals::Column::ScreenerDate.eq(date))
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl SignalSink for MomentumSignalRepository {
    async fn insert_row(
        &self,
        stamp: &RunStamp,
        seq: u32,
        fields: &[String],
    ) -> Result<(), ScrapeError> {
        self.insert(Self::record(stamp, seq, fields)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> RunStamp {
        RunStamp {
            run_id: "run-m".to_string(),
            run_date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
        }
    }

    fn fields() -> Vec<String> {
        [
            "HDFCBANK",
            "Long",
            "1,705.40",
            "+182%",
            "2.5x ↑",
            "4",
            "1,794.00",
            "1,363.55",
            "1.2%",
            "0.8%",
            "68.4",
            "31.2",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect()
    }

    #[test]
    fn record_maps_all_twelve_columns_in_order() {
        let model = MomentumSignalRepository::record(&stamp(), 2, &fields());
        assert_eq!(model.stock_name.clone().unwrap(), Some("HDFCBANK".to_string()));
        assert_eq!(model.trade_type.clone().unwrap(), Some("Long".to_string()));
        assert_eq!(model.ltp.clone().unwrap(), Some("1,705.40".to_string()));
        assert_eq!(model.vol_change.clone().unwrap(), Some("+182%".to_string()));
        assert_eq!(model.momentum_rank.clone().unwrap(), Some("4".to_string()));
        assert_eq!(model.fiftytwo_week_high.clone().unwrap(), Some("1,794.00".to_string()));
        assert_eq!(model.fiftytwo_week_low.clone().unwrap(), Some("1,363.55".to_string()));
        assert_eq!(model.twentyone_ema_pct.clone().unwrap(), Some("1.2%".to_string()));
        assert_eq!(model.vwap_pct.clone().unwrap(), Some("0.8%".to_string()));
        assert_eq!(model.rsi_5min.clone().unwrap(), Some("68.4".to_string()));
        assert_eq!(model.adx_5min.clone().unwrap(), Some("31.2".to_string()));
        assert_eq!(model.screener_rank.clone().unwrap(), Some("2".to_string()));
    }

    #[test]
    fn volume_ratio_is_stripped_of_decorations() {
        let model = MomentumSignalRepository::record(&stamp(), 1, &fields());
        assert_eq!(model.vol_ratio.clone().unwrap(), Some("2.5x ".to_string()));
    }
}
