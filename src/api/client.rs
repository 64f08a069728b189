//! NewsifyClient - handles communication with the newsify service.

use std::time::Duration;

use reqwest::multipart::{Form, Part};

use super::types::{ErrorResponse, SubmissionResult, UploadResponse};
use crate::image::UploadPart;
use crate::style::StylePreset;

/// The environment variable that overrides the service base URL.
pub const NEWSIFY_ENDPOINT_ENV: &str = "NEWSIFY_ENDPOINT";

/// Default base URL of the newsify service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Path of the upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Default timeout for the upload request (120 seconds).
///
/// The service describes the image, writes the article and generates a theme
/// before it answers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the newsify upload endpoint.
#[derive(Debug, Clone)]
pub struct NewsifyClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl NewsifyClient {
    /// Create a client for the base URL in `NEWSIFY_ENDPOINT`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, ApiError> {
        let base_url =
            std::env::var(NEWSIFY_ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client for a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidBaseUrl);
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// Upload an image with the chosen style and return the generated article.
    ///
    /// Sends one multipart request with the fields `file` and `style`. No
    /// retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpError` if the request fails,
    /// `ApiError::Server` for a non-success status, or
    /// `ApiError::MalformedResponse` if the body is not the expected JSON.
    pub async fn upload(
        &self,
        part: UploadPart,
        style: StylePreset,
    ) -> Result<SubmissionResult, ApiError> {
        let url = self.upload_url();
        log::info!(
            "Uploading {} ({} bytes) with style '{}' to {}",
            part.file_name,
            part.bytes.len(),
            style,
            url
        );

        let file_part = Part::bytes(part.bytes)
            .file_name(part.file_name)
            .mime_str(&part.mime_type)?;
        let form = Form::new()
            .part("file", file_part)
            .text("style", style.as_str());

        let response = self.http_client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorResponse>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);
            log::error!("Failed to generate article: {} {}", status, message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: UploadResponse = serde_json::from_str(&body).map_err(|e| {
            log::error!("Unexpected response from newsify service: {}", e);
            ApiError::MalformedResponse(e.to_string())
        })?;

        log::info!("Article generated");
        Ok(parsed.into())
    }
}

/// Errors that can occur when talking to the newsify service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Service base URL is empty")]
    InvalidBaseUrl,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Service returned {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the body, or the raw body
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
