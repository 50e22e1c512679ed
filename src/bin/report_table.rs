/// Prints the stored market reports and recent city comparisons as tables
///
/// Run with: cargo run --bin report-table [YEAR]
use realty_genie::prelude::*;
use realty_genie::constants::DEFAULT_COMPARISON_LIMIT;
use realty_genie::presentation::{comparisons_table, reports_table};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let year = std::env::args().nth(1);

    let store = open_report_store(&config.database).await?;
    let reports = store.list_reports(year.as_deref()).await?;
    info!("{} reports in the {} store", reports.len(), store.backend());

    reports_table(&reports).printstd();

    let comparisons = store
        .list_comparisons(None, year.as_deref(), DEFAULT_COMPARISON_LIMIT)
        .await?;
    if !comparisons.is_empty() {
        comparisons_table(&comparisons).printstd();
    }
    Ok(())
}
