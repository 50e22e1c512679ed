/// Module containing database configuration structures
pub mod config;
/// In-memory store
pub mod memory;
/// PostgreSQL store
pub mod postgres;
/// Store trait
pub mod store;
/// Connection helpers
pub mod utils;

pub use memory::MemoryReportStore;
pub use postgres::PgReportStore;
pub use store::ReportStore;
pub use utils::{create_connection_pool, open_report_store};
