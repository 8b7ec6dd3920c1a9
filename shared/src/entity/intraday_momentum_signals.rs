//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One row of the intraday momentum screener export. The momentum feed
/// carries the widest metric set of the three screeners.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "sg_intraday_momentum_signals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u64,
    pub screener_run_id: Option<String>,
    pub screener_date: Option<Date>,
    pub screener_type: Option<String>,
    pub screener: Option<String>,
    pub stock_name: Option<String>,
    pub trade_type: Option<String>,
    pub ltp: Option<String>,
    pub vol_change: Option<String>,
    pub vol_ratio: Option<String>,
    pub momentum_rank: Option<String>,
    pub fiftytwo_week_high: Option<String>,
    pub fiftytwo_week_low: Option<String>,
    pub twentyone_ema_pct: Option<String>,
    pub vwap_pct: Option<String>,
    pub rsi_5min: Option<String>,
    pub adx_5min: Option<String>,
    pub screener_rank: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
