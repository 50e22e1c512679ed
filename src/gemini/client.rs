/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::GeminiConfig;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::{AppError, AppResult};
use crate::model::http::make_http_request;
use crate::model::requests::GenerateContentRequest;
use crate::model::responses::GenerateContentResponse;
use crate::model::retry::RetryConfig;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Something that reads a PDF and answers a prompt about it
#[async_trait]
pub trait ReportExtractor: Send + Sync {
    /// Sends `pdf` and `prompt` to `model` and returns the raw text answer
    async fn generate(&self, model: &str, prompt: &str, pdf: &[u8]) -> AppResult<String>;
}

/// Client of the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
    rate_limiter: RateLimiter,
    retry_config: RetryConfig,
}

impl GeminiClient {
    /// Creates a client with its own HTTP connection pool
    pub fn new(
        config: GeminiConfig,
        rate_limiter: RateLimiter,
        retry_config: RetryConfig,
    ) -> AppResult<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            config,
            http_client,
            rate_limiter,
            retry_config,
        })
    }

    /// `{base}/models/{model}:generateContent`
    pub fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ReportExtractor for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str, pdf: &[u8]) -> AppResult<String> {
        if self.config.api_key.is_empty() {
            return Err(AppError::InvalidInput(
                "GEMINI_API_KEY is not configured".to_string(),
            ));
        }

        let url = self.generate_url(model);
        let body = GenerateContentRequest::pdf_with_prompt(pdf, prompt);
        info!("Calling {} with a {} byte PDF", model, pdf.len());

        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            Method::POST,
            &url,
            vec![("x-goog-api-key", self.config.api_key.as_str())],
            Some(&body),
            self.retry_config.clone(),
        )
        .await?;

        let answer: GenerateContentResponse = response.json().await?;
        if let Some(usage) = &answer.usage_metadata {
            debug!(
                "Token usage: prompt {:?}, candidates {:?}, total {:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        let text = answer.text();
        if text.trim().is_empty() {
            warn!(
                "Model returned no text (reason: {})",
                answer.block_reason().unwrap_or("unknown")
            );
            return Err(AppError::EmptyModelResponse);
        }

        info!("Model response received: {} characters", text.len());
        Ok(text)
    }
}
