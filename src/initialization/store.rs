//! Scan history store initialization.

use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::error_handling::DatabaseError;
use crate::storage::{init_db_pool_with_path, run_migrations, DisabledScanStore, ScanStore, SqliteScanStore};

/// Picks the scan history store for this process.
///
/// A SQLite-backed store is created when `Config::database_path` is set;
/// otherwise a no-op store is returned and scan history is silently skipped.
///
/// # Errors
///
/// Returns a `DatabaseError` if the configured database cannot be opened or
/// migrated.
pub async fn init_scan_store(config: &Config) -> Result<Arc<dyn ScanStore>, DatabaseError> {
    match &config.database_path {
        Some(path) => {
            let pool = init_db_pool_with_path(path).await?;
            run_migrations(&pool).await?;
            info!("Scan history enabled: {}", path.display());
            Ok(Arc::new(SqliteScanStore::new(pool)))
        }
        None => {
            info!("Scan history disabled (no database configured)");
            Ok(Arc::new(DisabledScanStore))
        }
    }
}
