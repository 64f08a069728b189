//! The acquired image sum type and its upload normalization.

use std::path::PathBuf;

use super::data_url::DataUrl;
use super::file::ImageFile;
use super::preview::PreviewRef;

/// File name given to camera snapshots when they are uploaded.
pub const CAPTURED_FILE_NAME: &str = "captured_image.jpg";

/// MIME type given to camera snapshots when they are uploaded.
pub const CAPTURED_MIME_TYPE: &str = "image/jpeg";

/// The image the user picked or captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquiredImage {
    /// A file chosen through the file picker.
    BinaryFile(ImageFile),
    /// A still frame captured from the camera.
    DataUrl(DataUrl),
}

impl AcquiredImage {
    /// Displayable reference for this image.
    pub fn preview(&self) -> PreviewRef {
        match self {
            AcquiredImage::BinaryFile(file) => PreviewRef::for_file(file),
            AcquiredImage::DataUrl(url) => PreviewRef::for_data_url(url),
        }
    }
}

/// The binary `file` part of an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Convert an acquired image into the uniform upload payload.
///
/// Files are attached unmodified. Data URLs are decoded and renamed to
/// [`CAPTURED_FILE_NAME`] with MIME type [`CAPTURED_MIME_TYPE`].
pub fn normalize(image: &AcquiredImage) -> Result<UploadPart, ImageError> {
    match image {
        AcquiredImage::BinaryFile(file) => Ok(UploadPart {
            file_name: file.file_name().to_string(),
            mime_type: file.mime_type().to_string(),
            bytes: file.bytes().to_vec(),
        }),
        AcquiredImage::DataUrl(url) => {
            let decoded = url.decode()?;
            log::debug!(
                "Decoded {} byte snapshot ({}) for upload",
                decoded.bytes.len(),
                decoded.mime_type
            );
            Ok(UploadPart {
                file_name: CAPTURED_FILE_NAME.to_string(),
                mime_type: CAPTURED_MIME_TYPE.to_string(),
                bytes: decoded.bytes,
            })
        }
    }
}

/// Errors raised while acquiring or normalizing an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported image type: {file_name}")]
    UnsupportedType { file_name: String },

    #[error("Unsupported image shape: {reason}")]
    UnsupportedShape { reason: String },

    #[error("Invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_binary_file_is_unmodified() {
        let file = ImageFile::from_bytes("cat.png", vec![1, 2, 3]).unwrap();
        let part = normalize(&AcquiredImage::BinaryFile(file)).unwrap();
        assert_eq!(part.file_name, "cat.png");
        assert_eq!(part.mime_type, "image/png");
        assert_eq!(part.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_normalize_data_url_gets_synthetic_name() {
        let url = DataUrl::encode("image/webp", b"frame");
        let part = normalize(&AcquiredImage::DataUrl(url)).unwrap();
        assert_eq!(part.file_name, CAPTURED_FILE_NAME);
        assert_eq!(part.mime_type, CAPTURED_MIME_TYPE);
        assert_eq!(part.bytes, b"frame".to_vec());
    }

    #[test]
    fn test_normalize_rejects_unrecognized_data_url() {
        let url = DataUrl::new("blob:somewhere/123");
        let result = normalize(&AcquiredImage::DataUrl(url));
        assert!(matches!(result, Err(ImageError::UnsupportedShape { .. })));
    }

    #[test]
    fn test_preview_of_data_url_is_itself() {
        let url = DataUrl::encode("image/jpeg", b"abc");
        let image = AcquiredImage::DataUrl(url.clone());
        assert_eq!(image.preview().as_str(), url.as_str());
    }

    #[test]
    fn test_error_display() {
        let err = ImageError::UnsupportedType {
            file_name: "notes.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported image type: notes.txt");
    }
}
