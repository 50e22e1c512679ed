use crate::error::AppError;
use crate::storage::config::DatabaseConfig;
use crate::storage::memory::MemoryReportStore;
use crate::storage::postgres::PgReportStore;
use crate::storage::store::ReportStore;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{info, warn};

/// Creates a PostgreSQL connection pool from database configuration
///
/// # Arguments
/// * `config` - Database configuration containing URL and max connections
///
/// # Returns
/// * `Result<PgPool, AppError>` - Connection pool or an error
pub async fn create_connection_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    info!(
        "Creating PostgreSQL connection pool with max {} connections",
        config.max_connections
    );

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .connect(&config.url)
        .await
        .map_err(AppError::Db)?;

    info!("PostgreSQL connection pool created successfully");
    Ok(pool)
}

/// Opens the configured report store
///
/// Connects to PostgreSQL and creates the schema when a URL is configured,
/// otherwise falls back to [`MemoryReportStore`].
pub async fn open_report_store(config: &DatabaseConfig) -> Result<Arc<dyn ReportStore>, AppError> {
    if !config.is_configured() {
        warn!("No database configured, using the in-memory report store");
        return Ok(Arc::new(MemoryReportStore::new()));
    }

    let pool = create_connection_pool(config).await?;
    let store = PgReportStore::new(pool);
    store.initialize().await?;
    Ok(Arc::new(store))
}
