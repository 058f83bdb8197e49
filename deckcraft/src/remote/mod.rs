//! Remote image generation
//!
//! Talks to an OpenAI-compatible `images/generations` endpoint. The prompt is
//! extended with print specifications before sending; the image comes back
//! either as a URL to download or inline as base64.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::RemoteConfig;

/// Requested image size, close to the deck's proportions
pub const IMAGE_SIZE: &str = "512x1536";

/// Appended to every prompt sent to the generator
pub const PRINT_SPECIFICATIONS: &str = "Additional specifications:
- Vertical skateboard deck format (8.25\" x 32\" proportions)
- High resolution, print-ready quality
- Bold, vibrant colors in Jimbo Phillips style
- Professional skateboard graphic design aesthetic
- Dynamic composition flowing top to bottom";

/// Remote generation errors
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote image generation is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("cannot decode inline image: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Image generation request
#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

/// Image generation response
#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    b64_json: Option<String>,
}

/// The prompt as sent to the generator
pub fn enhance_prompt(prompt: &str) -> String {
    format!("{}\n\n{PRINT_SPECIFICATIONS}", prompt.trim_end())
}

/// Client for the remote generator
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl ImageClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Check if an API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate an image for a prompt, returning the encoded image bytes
    pub async fn generate(&self, prompt: &str) -> Result<Vec<u8>, RemoteError> {
        let api_key = self.api_key.as_ref().ok_or(RemoteError::NotConfigured)?;

        let prompt = enhance_prompt(prompt);
        let request = ImageRequest {
            model: &self.model,
            prompt: &prompt,
            n: 1,
            size: IMAGE_SIZE,
        };

        debug!("Sending image generation request with model {}", self.model);

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Image API error: {} - {}", status, body);
            return Err(RemoteError::Status { status });
        }

        let image_response: ImageResponse = response.json().await?;
        let image = image_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::Malformed("no image generated".to_string()))?;

        match (image.b64_json, image.url) {
            (Some(b64), _) => Ok(BASE64.decode(b64.trim())?),
            (None, Some(url)) => self.download(&url).await,
            (None, None) => Err(RemoteError::Malformed(
                "image has neither url nor b64_json".to_string(),
            )),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, RemoteError> {
        debug!("Downloading image from: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status {
                status: response.status(),
            });
        }

        let data = response.bytes().await?;
        Ok(data.to_vec())
    }
}
