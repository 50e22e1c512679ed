/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, error, warn};

/// Whether a status is worth retrying after a delay
fn is_retryable(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE
    )
}

/// Makes an HTTP request with rate limiting and retry on rate limit / overload
///
/// Every attempt first waits on the shared `rate_limiter`. A `429` or `503`
/// answer is retried after `retry_config.delay_secs()` seconds, at most
/// `retry_config.max_retries()` times; any other non-success status is
/// returned as [`AppError::ModelApi`] carrying the response body.
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     &rate_limiter,
///     Method::POST,
///     "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
///     vec![("x-goog-api-key", api_key.as_str())],
///     Some(&body),
///     RetryConfig::with_max_retries_and_delay(3, 5),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&B>,
    retry_config: RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();
    let delay_secs = retry_config.delay_secs();

    loop {
        rate_limiter.wait().await;

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url);

        for (name, value) in &headers {
            request = request.header(*name, *value);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();

        if is_retryable(status) {
            retry_count += 1;
            if retry_count > max_retries {
                error!(
                    "Giving up after {} attempts, last status {}: {}",
                    retry_count, status, body_text
                );
                return Err(AppError::RateLimitExceeded);
            }

            warn!(
                "Request throttled with {} (attempt {}). Waiting {} seconds before retry...",
                status, retry_count, delay_secs
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(delay_secs)).await;
            continue;
        }

        error!("Request failed with status {}: {}", status, body_text);
        return Err(AppError::ModelApi {
            status,
            body: body_text,
        });
    }
}
