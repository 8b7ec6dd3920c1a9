use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccuracySignals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AccuracySignals::Id).big_unsigned().auto_increment().primary_key())
                    .col(ColumnDef::new(AccuracySignals::ScreenerRunId).string_len(160).null())
                    .col(ColumnDef::new(AccuracySignals::ScreenerDate).date().null())
                    .col(ColumnDef::new(AccuracySignals::ScreenerType).string_len(100).null())
                    .col(ColumnDef::new(AccuracySignals::Screener).string_len(100).null())
                    .col(ColumnDef::new(AccuracySignals::StockName).string_len(100).null())
                    .col(ColumnDef::new(AccuracySignals::TradeType).string_len(100).null())
                    .col(ColumnDef::new(AccuracySignals::Ltp).string_len(100).null())
                    .col(ColumnDef::new(AccuracySignals::TodaysRange).string_len(100).null())
                    .col(ColumnDef::new(AccuracySignals::ScreenerRank).string_len(100).null())
                    .index(
                        Index::create()
                            .name("idx_accuracy_signals_run_id")
                            .table(AccuracySignals::Table)
                            .col(AccuracySignals::ScreenerRunId),
                    )
                    .index(
                        Index::create()
                            .name("idx_accuracy_signals_date")
                            .table(AccuracySignals::Table)
                            .col(AccuracySignals::ScreenerDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccuracySignals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AccuracySignals {
    #[sea_orm(iden = "sg_intraday_accuracy_signals")]
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
