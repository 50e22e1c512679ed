use crate::constants::REPORT_SOURCE;
use crate::error::AppResult;
use crate::presentation::{
    CityComparison, CityData, ReportPeriod, StoredComparison, StoredReport, sorted_names,
};
use crate::storage::store::ReportStore;
use crate::utils::id::new_document_id;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::{debug, info};

const REPORT_COLUMNS: &str = "id, month, year, data, json_valid, source, created_at, updated_at";
const COMPARISON_COLUMNS: &str =
    "id, month, year, city_names, cities, summary, created_at, updated_at";

/// Report store backed by PostgreSQL JSONB columns
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    /// Creates a store over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates tables, indexes and the `updated_at` triggers if missing
    pub async fn initialize(&self) -> AppResult<()> {
        info!("Initializing report database tables...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS market_reports (
                id VARCHAR(32) PRIMARY KEY,
                month VARCHAR(16) NOT NULL,
                year VARCHAR(4) NOT NULL,
                data JSONB NOT NULL,
                json_valid BOOLEAN NOT NULL DEFAULT TRUE,
                source VARCHAR(100) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                UNIQUE (month, year)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS city_comparisons (
                id VARCHAR(32) PRIMARY KEY,
                month VARCHAR(16) NOT NULL,
                year VARCHAR(4) NOT NULL,
                city_names TEXT[] NOT NULL,
                cities JSONB NOT NULL,
                summary TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                UNIQUE (month, year, city_names)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let indexes = [
            "CREATE INDEX IF NOT EXISTS idx_market_reports_year ON market_reports(year)",
            "CREATE INDEX IF NOT EXISTS idx_market_reports_created_at ON market_reports(created_at)",
            "CREATE INDEX IF NOT EXISTS idx_city_comparisons_period ON city_comparisons(month, year)",
            "CREATE INDEX IF NOT EXISTS idx_city_comparisons_created_at ON city_comparisons(created_at)",
        ];
        for index_sql in indexes {
            sqlx::query(index_sql).execute(&self.pool).await?;
        }

        sqlx::query(
            r#"
            CREATE OR REPLACE FUNCTION update_updated_at_column()
            RETURNS TRIGGER AS $$
            BEGIN
                NEW.updated_at = NOW();
                RETURN NEW;
            END;
            $$ language 'plpgsql'
            "#,
        )
        .execute(&self.pool)
        .await?;

        for table in ["market_reports", "city_comparisons"] {
            sqlx::query(&format!(
                "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table}"
            ))
            .execute(&self.pool)
            .await?;
            sqlx::query(&format!(
                "CREATE TRIGGER update_{table}_updated_at BEFORE UPDATE ON {table} \
                 FOR EACH ROW EXECUTE FUNCTION update_updated_at_column()"
            ))
            .execute(&self.pool)
            .await?;
        }

        info!("Report database initialized");
        Ok(())
    }

    fn comparison_from_row(row: &PgRow) -> AppResult<StoredComparison> {
        let cities: Json<Vec<CityData>> = row.try_get("cities")?;
        Ok(StoredComparison {
            id: row.try_get("id")?,
            month: row.try_get("month")?,
            year: row.try_get("year")?,
            city_names: row.try_get("city_names")?,
            cities: cities.0,
            summary: row.try_get("summary")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn get_report(
        &self,
        month: &str,
        year: Option<&str>,
    ) -> AppResult<Option<StoredReport>> {
        let report = sqlx::query_as::<_, StoredReport>(&format!(
            "SELECT {REPORT_COLUMNS} FROM market_reports \
             WHERE month = $1 AND ($2::VARCHAR IS NULL OR year = $2) \
             ORDER BY year DESC, created_at DESC LIMIT 1"
        ))
        .bind(month)
        .bind(year)
        .fetch_optional(&self.pool)
        .await?;
        Ok(report)
    }

    async fn list_reports(&self, year: Option<&str>) -> AppResult<Vec<StoredReport>> {
        let reports = sqlx::query_as::<_, StoredReport>(&format!(
            "SELECT {REPORT_COLUMNS} FROM market_reports \
             WHERE ($1::VARCHAR IS NULL OR year = $1) \
             ORDER BY year DESC, created_at DESC"
        ))
        .bind(year)
        .fetch_all(&self.pool)
        .await?;
        debug!("Loaded {} reports", reports.len());
        Ok(reports)
    }

    async fn save_report(
        &self,
        period: &ReportPeriod,
        data: &Value,
        json_valid: bool,
    ) -> AppResult<String> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO market_reports (id, month, year, data, json_valid, source)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (month, year) DO UPDATE SET
                data = EXCLUDED.data,
                json_valid = EXCLUDED.json_valid,
                source = EXCLUDED.source
            RETURNING id
            "#,
        )
        .bind(new_document_id())
        .bind(period.month())
        .bind(period.year())
        .bind(data)
        .bind(json_valid)
        .bind(REPORT_SOURCE)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved report {} for {}", id, period);
        Ok(id)
    }

    async fn delete_report(&self, month: &str, year: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM market_reports WHERE month = $1 AND year = $2")
            .bind(month)
            .bind(year)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn save_comparison(
        &self,
        comparison: &CityComparison,
        cities: &[String],
    ) -> AppResult<String> {
        let city_names = sorted_names(cities.iter().map(String::as_str));
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO city_comparisons (id, month, year, city_names, cities, summary)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (month, year, city_names) DO UPDATE SET
                cities = EXCLUDED.cities,
                summary = EXCLUDED.summary
            RETURNING id
            "#,
        )
        .bind(new_document_id())
        .bind(&comparison.month)
        .bind(&comparison.year)
        .bind(&city_names)
        .bind(Json(&comparison.cities))
        .bind(&comparison.summary)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Saved comparison {} of {} for {} {}",
            id,
            city_names.join(", "),
            comparison.month,
            comparison.year
        );
        Ok(id)
    }

    async fn find_comparison(
        &self,
        month: &str,
        year: &str,
        cities: &[String],
    ) -> AppResult<Option<StoredComparison>> {
        let city_names = sorted_names(cities.iter().map(String::as_str));
        let row = sqlx::query(&format!(
            "SELECT {COMPARISON_COLUMNS} FROM city_comparisons \
             WHERE month = $1 AND year = $2 AND city_names = $3"
        ))
        .bind(month)
        .bind(year)
        .bind(&city_names)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::comparison_from_row).transpose()
    }

    async fn list_comparisons(
        &self,
        month: Option<&str>,
        year: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<StoredComparison>> {
        let rows = sqlx::query(&format!(
            "SELECT {COMPARISON_COLUMNS} FROM city_comparisons \
             WHERE ($1::VARCHAR IS NULL OR month = $1) AND ($2::VARCHAR IS NULL OR year = $2) \
             ORDER BY year DESC, created_at DESC LIMIT $3"
        ))
        .bind(month)
        .bind(year)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::comparison_from_row).collect()
    }
}
