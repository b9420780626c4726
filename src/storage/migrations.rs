// storage/migrations.rs
// Database migration management

use sqlx::migrate::Migrator;
use sqlx::{Pool, Sqlite};

use crate::error_handling::DatabaseError;

/// Migrations from `migrations/`, embedded at compile time so the binary
/// does not depend on the source tree at runtime.
static MIGRATOR: Migrator = sqlx::migrate!();

/// Applies any pending migrations.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
