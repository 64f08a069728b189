//! Navigation target for the result page.

use std::fmt;

use crate::api::SubmissionResult;

/// Default result page.
pub const DEFAULT_RESULT_PAGE: &str = "/newsified.html";

/// Where to send the user after a successful submission.
///
/// Renders as `<page>?image=<enc>&article=<enc>` with both values
/// percent-encoded. Everything outside `A-Z a-z 0-9 - _ . ~` is escaped,
/// including `! * ' ( )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLocation {
    page: String,
    image: String,
    article: String,
}

impl ResultLocation {
    pub fn new(page: impl Into<String>, result: &SubmissionResult) -> Self {
        Self {
            page: page.into(),
            image: result.image_url.clone(),
            article: result.article.clone(),
        }
    }

    /// Result location on the default page.
    pub fn for_result(result: &SubmissionResult) -> Self {
        Self::new(DEFAULT_RESULT_PAGE, result)
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    /// Absolute URL on the given origin (e.g. `http://localhost:3000`).
    pub fn with_origin(&self, origin: &str) -> String {
        let origin = origin.trim_end_matches('/');
        if self.page.starts_with('/') {
            format!("{}{}", origin, self)
        } else {
            format!("{}/{}", origin, self)
        }
    }
}

impl fmt::Display for ResultLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}?image={}&article={}",
            self.page,
            urlencoding::encode(&self.image),
            urlencoding::encode(&self.article)
        )
    }
}
