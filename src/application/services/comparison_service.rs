use crate::application::config::Config;
use crate::application::interfaces::comparison::ComparisonService;
use crate::application::models::{
    CityComparisonEmailRequest, ComparisonEmailResponse, ComparisonImageResponse,
    require_recipients, subject_or,
};
use crate::constants::{
    COMPARISON_IMAGE_WIDTH, GREATER_VANCOUVER_CITIES, MAX_COMPARISON_CITIES,
    MIN_COMPARISON_CITIES,
};
use crate::error::AppError;
use crate::gemini::prompts::city_comparison_prompt;
use crate::gemini::{ReportExtractor, parse_model_object};
use crate::mail::Mailer;
use crate::presentation::{CityComparison, ReportPeriod};
use crate::render::{ImageHost, ImageRenderer, city_comparison_html};
use crate::source::ReportFetcher;
use crate::storage::ReportStore;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Checks that `cities` names two or three distinct Greater Vancouver areas
///
/// Matching ignores case and surrounding blanks; the canonical names are
/// returned in request order.
pub fn validate_city_names(cities: &[String]) -> Result<Vec<String>, AppError> {
    if !(MIN_COMPARISON_CITIES..=MAX_COMPARISON_CITIES).contains(&cities.len()) {
        return Err(AppError::InvalidInput(
            "Please provide 2-3 cities for comparison".to_string(),
        ));
    }

    let mut canonical: Vec<String> = Vec::with_capacity(cities.len());
    for city in cities {
        let name = GREATER_VANCOUVER_CITIES
            .iter()
            .find(|known| known.eq_ignore_ascii_case(city.trim()))
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Invalid city: {city}. Must be from Greater Vancouver area."
                ))
            })?;
        if canonical.iter().any(|c| c == name) {
            return Err(AppError::InvalidInput(format!(
                "Duplicate city: {name}. Please provide 2-3 different cities."
            )));
        }
        canonical.push(name.to_string());
    }
    Ok(canonical)
}

/// Implementation of the city comparison service
pub struct ComparisonServiceImpl {
    config: Arc<Config>,
    fetcher: Arc<dyn ReportFetcher>,
    extractor: Arc<dyn ReportExtractor>,
    store: Arc<dyn ReportStore>,
    mailer: Arc<dyn Mailer>,
    renderer: Arc<dyn ImageRenderer>,
    host: Arc<dyn ImageHost>,
}

impl ComparisonServiceImpl {
    /// Creates a new instance of the comparison service
    pub fn new(
        config: Arc<Config>,
        fetcher: Arc<dyn ReportFetcher>,
        extractor: Arc<dyn ReportExtractor>,
        store: Arc<dyn ReportStore>,
        mailer: Arc<dyn Mailer>,
        renderer: Arc<dyn ImageRenderer>,
        host: Arc<dyn ImageHost>,
    ) -> Self {
        Self {
            config,
            fetcher,
            extractor,
            store,
            mailer,
            renderer,
            host,
        }
    }

    async fn generate(
        &self,
        period: &ReportPeriod,
        cities: &[String],
    ) -> Result<CityComparison, AppError> {
        let pdf = self.fetcher.fetch(period).await?;
        let model = &self.config.gemini.comparison_model;
        info!("Comparing {} for {} with {}", cities.join(", "), period, model);

        let raw = self
            .extractor
            .generate(model, &city_comparison_prompt(cities, period), &pdf)
            .await?;
        let repaired = parse_model_object(&raw)?;
        let mut comparison: CityComparison = serde_json::from_value(repaired.value)?;
        debug!("Model returned {} areas", comparison.cities.len());

        comparison.month = period.month().to_string();
        comparison.year = period.year().to_string();
        Ok(comparison)
    }
}

#[async_trait]
impl ComparisonService for ComparisonServiceImpl {
    fn available_cities(&self) -> Vec<String> {
        GREATER_VANCOUVER_CITIES
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    fn validate_cities(&self, cities: &[String]) -> Result<Vec<String>, AppError> {
        validate_city_names(cities)
    }

    async fn compare(
        &self,
        period: &ReportPeriod,
        cities: &[String],
    ) -> Result<CityComparison, AppError> {
        let cities = self.validate_cities(cities)?;

        match self
            .store
            .find_comparison(period.month(), period.year(), &cities)
            .await
        {
            Ok(Some(stored)) => {
                info!("Comparison of {} for {} found", cities.join(", "), period);
                return Ok(stored.into_comparison());
            }
            Ok(None) => {}
            Err(e) => warn!("Comparison lookup failed, generating a new one: {}", e),
        }

        let comparison = self.generate(period, &cities).await?;
        if let Err(e) = self.store.save_comparison(&comparison, &cities).await {
            error!("Failed to save comparison for {}: {}", period, e);
        }
        Ok(comparison)
    }

    async fn email_comparison(
        &self,
        request: &CityComparisonEmailRequest,
    ) -> Result<ComparisonEmailResponse, AppError> {
        let period = request.period()?;
        let cities = self.validate_cities(&request.cities)?;
        require_recipients(&request.to_emails)?;

        let comparison = self.compare(&period, &cities).await?;
        let html = city_comparison_html(&comparison);
        let subject = subject_or(request.subject.as_deref(), || {
            format!(
                "Greater Vancouver City Comparison: {} - {} {}",
                cities.join(", "),
                period.month(),
                period.year()
            )
        });

        self.mailer
            .send_html(&request.to_emails, &subject, &html)
            .await?;

        Ok(ComparisonEmailResponse {
            success: true,
            message: format!(
                "City comparison email sent to {} recipient(s)",
                request.to_emails.len()
            ),
            recipients: request.to_emails.clone(),
            cities,
            month: period.month().to_string(),
            year: period.year().to_string(),
        })
    }

    async fn comparison_image(
        &self,
        period: &ReportPeriod,
        cities: &[String],
    ) -> Result<ComparisonImageResponse, AppError> {
        let cities = self.validate_cities(cities)?;
        let comparison = self.compare(period, &cities).await?;

        let html = city_comparison_html(&comparison);
        let png = self
            .renderer
            .render_png(&html, COMPARISON_IMAGE_WIDTH)
            .await?;
        info!("Rendered comparison image of {} bytes", png.len());

        let image_url = self.host.upload(&png).await;
        Ok(ComparisonImageResponse {
            success: true,
            image_base64: format!("data:image/png;base64,{}", STANDARD.encode(&png)),
            image_url,
            month: period.month().to_string(),
            year: period.year().to_string(),
            cities,
        })
    }
}
