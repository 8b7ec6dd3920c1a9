use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn get_db_connection(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database via Sea-ORM");
    let db = Database::connect(database_url).await?;
    Ok(db)
}

/// Close the connection if this is the last owner. A still-shared handle
/// cannot be closed explicitly, so that case is logged rather than passing
/// silently; the pool still closes when the final clone drops.
pub async fn close_db_connection(db: Arc<DatabaseConnection>) -> Result<()> {
    match Arc::try_unwrap(db) {
        Ok(conn) => {
            conn.close().await?;
            info!("Database connection closed");
        }
        Err(_) => warn!("Database connection still shared at shutdown; skipping explicit close"),
    }
    Ok(())
}
