use crate::application::models::{
    CitiesResponse, CityComparisonEmailRequest, CityComparisonRequest, ComparisonEmailResponse,
    ComparisonImageResponse, EmailRequest, EmailSentResponse, HealthResponse,
    InfographicResponse, MessageResponse, MonthRequest, ReportListResponse,
};
use crate::presentation::{CityComparison, StoredReport};
use crate::server::error::{ApiError, ErrorPrefix};
use crate::server::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// Optional `?year=` filter
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    /// Four digit year
    pub year: Option<String>,
}

impl YearQuery {
    fn year(&self) -> Option<&str> {
        self.year.as_deref().map(str::trim).filter(|y| !y.is_empty())
    }
}

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Market Report API Running".to_string(),
        database: state.store.ping().await,
    })
}

/// `POST /analyze`
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<MonthRequest>,
) -> Result<Json<Value>, ApiError> {
    let period = request.period()?;
    Ok(Json(state.reports.analyze(&period).await?))
}

/// `GET /reports`
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<ReportListResponse>, ApiError> {
    let reports = state.reports.list_reports(query.year()).await?;
    Ok(Json(ReportListResponse {
        count: reports.len(),
        reports,
    }))
}

/// `GET /reports/:month`
pub async fn get_report(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Query(query): Query<YearQuery>,
) -> Result<Json<StoredReport>, ApiError> {
    Ok(Json(state.reports.get_report(&month, query.year()).await?))
}

/// `DELETE /reports/:month`
pub async fn delete_report(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Query(query): Query<YearQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.reports.delete_report(&month, query.year()).await?;
    Ok(Json(MessageResponse { message }))
}

/// `POST /infographic`
pub async fn infographic(
    State(state): State<AppState>,
    Json(request): Json<MonthRequest>,
) -> Result<Json<InfographicResponse>, ApiError> {
    let period = request.period()?;
    Ok(Json(state.reports.infographic(&period).await?))
}

/// `POST /send-email`
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailSentResponse>, ApiError> {
    let recipients = state
        .reports
        .send_infographic_email(&request)
        .await
        .prefixed("Failed to send email")?;
    Ok(Json(EmailSentResponse {
        message: "Email sent successfully".to_string(),
        recipients,
    }))
}

/// `GET /cities`
pub async fn cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state.comparisons.available_cities();
    Json(CitiesResponse {
        count: cities.len(),
        cities,
    })
}

/// `POST /compare-cities`
pub async fn compare_cities(
    State(state): State<AppState>,
    Json(request): Json<CityComparisonRequest>,
) -> Result<Json<CityComparison>, ApiError> {
    let period = request.period()?;
    info!("Comparison requested for {}", period);
    Ok(Json(
        state.comparisons.compare(&period, &request.cities).await?,
    ))
}

/// `POST /email-city-comparison`
pub async fn email_city_comparison(
    State(state): State<AppState>,
    Json(request): Json<CityComparisonEmailRequest>,
) -> Result<Json<ComparisonEmailResponse>, ApiError> {
    let response = state
        .comparisons
        .email_comparison(&request)
        .await
        .prefixed("Error sending city comparison email")?;
    Ok(Json(response))
}

/// `POST /city-comparison-image`
pub async fn city_comparison_image(
    State(state): State<AppState>,
    Json(request): Json<CityComparisonRequest>,
) -> Result<Json<ComparisonImageResponse>, ApiError> {
    let period = request.period()?;
    let response = state
        .comparisons
        .comparison_image(&period, &request.cities)
        .await
        .prefixed("Error generating city comparison image")?;
    Ok(Json(response))
}
