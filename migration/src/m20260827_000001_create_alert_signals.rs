use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlertSignals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AlertSignals::Id).big_unsigned().auto_increment().primary_key())
                    .col(ColumnDef::new(AlertSignals::ScreenerRunId).string_len(160).null())
                    .col(ColumnDef::new(AlertSignals::ScreenerDate).date().null())
                    .col(ColumnDef::new(AlertSignals::ScreenerType).string_len(100).null())
                    .col(ColumnDef::new(AlertSignals::Screener).string_len(100).null())
                    .col(ColumnDef::new(AlertSignals::StockName).string_len(100).null())
                    .col(ColumnDef::new(AlertSignals::TradeType).string_len(100).null())
                    .col(ColumnDef::new(AlertSignals::Ltp).string_len(100).null())
                    .col(ColumnDef::new(AlertSignals::TodaysRange).string_len(100).null())
                    .col(ColumnDef::new(AlertSignals::ScreenerRank).string_len(100).null())
                    .index(
                        Index::create()
                            .name("idx_alert_signals_run_id")
                            .table(AlertSignals::Table)
                            .col(AlertSignals::ScreenerRunId),
                    )
                    .index(
                        Index::create()
                            .name("idx_alert_signals_date")
                            .table(AlertSignals::Table)
                            .col(AlertSignals::ScreenerDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AlertSignals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AlertSignals {
    #[sea_orm(iden = "sg_intraday_alert_signals")]
    Table,
    Id,
    ScreenerRunId,
    ScreenerDate,
    ScreenerType,
    Screener,
    StockName,
    TradeType,
    Ltp,
    TodaysRange,
    ScreenerRank,
}
