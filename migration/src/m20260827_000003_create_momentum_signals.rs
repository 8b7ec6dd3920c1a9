use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MomentumSignals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MomentumSignals::Id).big_unsigned().auto_increment().primary_key())
                    .col(ColumnDef::new(MomentumSignals::ScreenerRunId).string_len(160).null())
                    .col(ColumnDef::new(MomentumSignals::ScreenerDate).date().null())
                    .col(ColumnDef::new(MomentumSignals::ScreenerType).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::Screener).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::StockName).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::TradeType).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::Ltp).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::VolChange).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::VolRatio).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::MomentumRank).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::FiftytwoWeekHigh).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::FiftytwoWeekLow).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::TwentyoneEmaPct).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::VwapPct).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::Rsi5min).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::Adx5min).string_len(100).null())
                    .col(ColumnDef::new(MomentumSignals::ScreenerRank).string_len(100).null())
                    .index(
                        Index::create()
                            .name("idx_momentum_signals_run_id")
                            .table(MomentumSignals::Table)
                            .col(MomentumSignals::ScreenerRunId),
                    )
                    .index(
                        Index::create()
                            .name("idx_momentum_signals_date")
                            .table(MomentumSignals::Table)
                            .col(MomentumSignals::ScreenerDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MomentumSignals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MomentumSignals {
    #[sea_orm(iden = "sg_intraday_momentum_signals")]
    Table,
    Id,
    ScreenerRunId,
    ScreenerDate,
    ScreenerType,
    Screener,
    StockName,
    TradeType,
    Ltp,
    VolChange,
    VolRatio,
    MomentumRank,
    FiftytwoWeekHigh,
    FiftytwoWeekLow,
    TwentyoneEmaPct,
    VwapPct,
    Rsi5min,
    Adx5min,
    ScreenerRank,
}
