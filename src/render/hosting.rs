use crate::application::config::ImageConfig;
use crate::constants::USER_AGENT;
use crate::error::AppResult;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

/// Publishes an image and returns its public URL
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads `png`; `None` when hosting is disabled or the upload failed
    async fn upload(&self, png: &[u8]) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    data: ImgbbImage,
}

#[derive(Debug, Deserialize)]
struct ImgbbImage {
    url: String,
}

/// [`ImageHost`] backed by the imgbb upload API
pub struct ImgbbHost {
    http_client: Client,
    api_key: Option<String>,
    upload_url: String,
}

impl ImgbbHost {
    /// Creates a host; uploads are skipped when `config` has no API key
    pub fn new(config: &ImageConfig) -> AppResult<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            api_key: config.imgbb_api_key.clone().filter(|k| !k.is_empty()),
            upload_url: config.imgbb_url.clone(),
        })
    }

    async fn try_upload(&self, api_key: &str, png: &[u8]) -> AppResult<String> {
        let encoded = STANDARD.encode(png);
        let response = self
            .http_client
            .post(&self.upload_url)
            .form(&[("key", api_key), ("image", encoded.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body: ImgbbResponse = response.json().await?;
        Ok(body.data.url)
    }
}

#[async_trait]
impl ImageHost for ImgbbHost {
    async fn upload(&self, png: &[u8]) -> Option<String> {
        let api_key = self.api_key.as_deref()?;
        info!("Uploading {} byte image to imgbb...", png.len());
        match self.try_upload(api_key, png).await {
            Ok(url) => {
                info!("Image uploaded: {}", url);
                Some(url)
            }
            Err(e) => {
                warn!("Failed to upload to imgbb: {}", e);
                None
            }
        }
    }
}
