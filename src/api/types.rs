//! Response types for the newsify service.

use serde::Deserialize;

/// The generated article and its presentation, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// Generated article text.
    pub article: String,
    /// Theme stylesheet for the result page, if the service produced one.
    pub theme_css: Option<String>,
    /// Reference to the uploaded image as stored by the service.
    pub image_url: String,
}

/// Wire shape of a successful `/upload` response.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    article: String,
    #[serde(default)]
    theme_css: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl From<UploadResponse> for SubmissionResult {
    fn from(response: UploadResponse) -> Self {
        Self {
            article: response.article,
            // An empty stylesheet has nothing to apply.
            theme_css: response.theme_css.filter(|css| !css.trim().is_empty()),
            image_url: response.image_url.unwrap_or_default(),
        }
    }
}

/// Wire shape of an error response (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}
