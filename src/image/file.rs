//! Picked image files.

use std::path::Path;

use super::types::ImageError;

/// Extensions accepted by the file picker, with their MIME types.
pub const SUPPORTED_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("heif", "image/heif"),
    ("heic", "image/heic"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

/// Look up the image MIME type for a file extension (case-insensitive).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let lower = ext.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == lower)
        .map(|(_, mime)| *mime)
}

/// An image file held in memory, ready to be attached as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    file_name: String,
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Read an image file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::UnsupportedType` when the extension is not an
    /// image type, or `ImageError::Io` when the file cannot be read. The type
    /// check runs first so non-images are never read.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_from_name(&file_name)?;

        let bytes = std::fs::read(path).map_err(|e| ImageError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        log::info!("Loaded {} ({} bytes, {})", file_name, bytes.len(), mime_type);

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Wrap bytes that are already in memory under the given file name.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let file_name = file_name.into();
        let mime_type = mime_from_name(&file_name)?;
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn mime_from_name(file_name: &str) -> Result<&'static str, ImageError> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .ok_or_else(|| ImageError::UnsupportedType {
            file_name: file_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("heif"), Some("image/heif"));
        assert_eq!(mime_for_extension("txt"), None);
    }

    #[test]
    fn test_from_bytes_rejects_non_image() {
        let result = ImageFile::from_bytes("notes.txt", vec![1]);
        assert!(matches!(result, Err(ImageError::UnsupportedType { .. })));
    }

    #[test]
    fn test_from_bytes_rejects_missing_extension() {
        let result = ImageFile::from_bytes("README", vec![1]);
        assert!(matches!(result, Err(ImageError::UnsupportedType { .. })));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cat.JPEG");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"jpeg-bytes").unwrap();

        let file = ImageFile::from_path(&path).unwrap();
        assert_eq!(file.file_name(), "Cat.JPEG");
        assert_eq!(file.mime_type(), "image/jpeg");
        assert_eq!(file.bytes(), b"jpeg-bytes");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageFile::from_path(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(ImageError::Io { .. })));
    }
}
