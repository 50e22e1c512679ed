use crate::application::models::{
    CityComparisonEmailRequest, ComparisonEmailResponse, ComparisonImageResponse,
};
use crate::error::AppError;
use crate::presentation::{CityComparison, ReportPeriod};
use async_trait::async_trait;

/// Interface for the city comparison service
#[async_trait]
pub trait ComparisonService: Send + Sync {
    /// Areas that can be compared
    fn available_cities(&self) -> Vec<String>;

    /// Checks the count and membership of `cities`, returning canonical names
    ///
    /// # Arguments
    /// * `cities` - Area names as sent by the caller, any case
    ///
    /// # Returns
    /// * The names as listed in [`ComparisonService::available_cities`], in request order
    fn validate_cities(&self, cities: &[String]) -> Result<Vec<String>, AppError>;

    /// Comparison of `cities` for `period`, from the store or the model
    async fn compare(
        &self,
        period: &ReportPeriod,
        cities: &[String],
    ) -> Result<CityComparison, AppError>;

    /// Emails a rendered comparison
    async fn email_comparison(
        &self,
        request: &CityComparisonEmailRequest,
    ) -> Result<ComparisonEmailResponse, AppError>;

    /// Renders a comparison to a PNG data URL, uploading it when a host is configured
    async fn comparison_image(
        &self,
        period: &ReportPeriod,
        cities: &[String],
    ) -> Result<ComparisonImageResponse, AppError>;
}
