pub use sea_orm_migration::prelude::*;

mod m20260827_000001_create_alert_signals;
mod m20260827_000002_create_accuracy_signals;
mod m20260827_000003_create_momentum_signals;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260827_000001_create_alert_signals::Migration),
            Box::new(m20260827_000002_create_accuracy_signals::Migration),
            Box::new(m20260827_000003_create_momentum_signals::Migration),
        ]
    }
}
