//! Image acquisition types and the normalization boundary.
//!
//! An image reaches the session either as a picked file ([`ImageFile`]) or as
//! a camera snapshot encoded as a data URL ([`DataUrl`]). Both are carried by
//! [`AcquiredImage`] and turned into a single [`UploadPart`] by [`normalize`]
//! right before submission.

mod data_url;
mod file;
mod preview;
mod types;

pub use data_url::{DataUrl, DecodedDataUrl};
pub use file::{mime_for_extension, ImageFile, SUPPORTED_EXTENSIONS};
pub use preview::PreviewRef;
pub use types::{
    normalize, AcquiredImage, ImageError, UploadPart, CAPTURED_FILE_NAME, CAPTURED_MIME_TYPE,
};
