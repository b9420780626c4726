//! API server HTTP handlers.

mod analyze;
mod health;
mod scans;

pub use analyze::analyze_handler;
pub use health::health_handler;
pub use scans::scans_handler;
