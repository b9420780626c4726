// storage/mod.rs
// Scan history persistence

pub mod migrations;
pub mod models;
pub mod pool;
pub mod scans;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use models::{ScanLogEntry, ScanStatus};
pub use pool::init_db_pool_with_path;
pub use scans::{record_scan_best_effort, DisabledScanStore, ScanStore, SqliteScanStore};
