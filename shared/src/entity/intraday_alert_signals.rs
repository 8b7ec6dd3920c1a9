//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One row of the intraday stock-alerts screener export. All screener
/// values are kept as free text so the site's formatting (commas, symbols)
/// survives unchanged.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "sg_intraday_alert_signals")]
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
    pub todays_range: Option<String>,
    pub screener_rank: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
