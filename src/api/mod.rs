//! newsify service integration.
//!
//! The service accepts an image plus a style preset on `POST /upload` and
//! answers with the generated article, an optional theme stylesheet and a
//! reference to the stored image.

mod client;
mod types;

pub use client::{
    ApiError, NewsifyClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, NEWSIFY_ENDPOINT_ENV, UPLOAD_PATH,
};
pub use types::SubmissionResult;
