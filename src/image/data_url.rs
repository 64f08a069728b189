//! `data:` URL handling for camera snapshots.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::types::ImageError;

/// A `data:<mime>[;base64],<payload>` string holding one still frame.
///
/// The string is kept verbatim; it doubles as the preview reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(String);

/// Payload of a data URL after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Wrap a raw data URL string without validating it.
    ///
    /// Validation happens in [`DataUrl::decode`], at submission time.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a base64 data URL from raw bytes.
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime_type, BASE64.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this looks like an image data URL (`data:image...`).
    pub fn is_image(&self) -> bool {
        self.0.starts_with("data:image")
    }

    /// Decode the payload.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::UnsupportedShape` if the string is not an image
    /// data URL, and `ImageError::Decode` if a base64 payload is invalid.
    pub fn decode(&self) -> Result<DecodedDataUrl, ImageError> {
        if !self.is_image() {
            return Err(ImageError::UnsupportedShape {
                reason: "expected a data:image URL".to_string(),
            });
        }

        let rest = &self.0["data:".len()..];
        let (header, payload) = rest.split_once(',').ok_or_else(|| ImageError::UnsupportedShape {
            reason: "data URL has no payload separator".to_string(),
        })?;

        let mut params = header.split(';');
        let mime_type = params.next().unwrap_or_default().trim().to_string();
        let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

        let bytes = if is_base64 {
            BASE64.decode(payload.trim())?
        } else {
            urlencoding::decode_binary(payload.as_bytes()).into_owned()
        };

        if bytes.is_empty() {
            return Err(ImageError::UnsupportedShape {
                reason: "data URL payload is empty".to_string(),
            });
        }

        Ok(DecodedDataUrl { mime_type, bytes })
    }
}

impl From<String> for DataUrl {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode_base64() {
        let url = DataUrl::encode("image/jpeg", &[0xFF, 0xD8, 0xFF, 0xE0]);
        assert!(url.as_str().starts_with("data:image/jpeg;base64,"));
        let decoded = url.decode().unwrap();
        assert_eq!(decoded.mime_type, "image/jpeg");
        assert_eq!(decoded.bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_decode_percent_encoded_payload() {
        let url = DataUrl::new("data:image/svg+xml,%3Csvg%2F%3E");
        let decoded = url.decode().unwrap();
        assert_eq!(decoded.mime_type, "image/svg+xml");
        assert_eq!(decoded.bytes, b"<svg/>".to_vec());
    }

    #[test]
    fn test_decode_rejects_non_image() {
        let url = DataUrl::new("data:text/plain;base64,aGVsbG8=");
        assert!(matches!(
            url.decode(),
            Err(ImageError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_plain_string() {
        let url = DataUrl::new("not a data url");
        assert!(!url.is_image());
        assert!(matches!(
            url.decode(),
            Err(ImageError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        let url = DataUrl::new("data:image/jpeg;base64");
        assert!(matches!(
            url.decode(),
            Err(ImageError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let url = DataUrl::new("data:image/jpeg;base64,***");
        assert!(matches!(url.decode(), Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        let url = DataUrl::new("data:image/jpeg;base64,");
        assert!(matches!(
            url.decode(),
            Err(ImageError::UnsupportedShape { .. })
        ));
    }
}
