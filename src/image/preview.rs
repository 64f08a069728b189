//! Preview references for acquired images.

use std::fmt;

use sha2::{Digest, Sha256};

use super::data_url::DataUrl;
use super::file::ImageFile;

/// Displayable reference to an acquired image.
///
/// Files get an object-URL style `blob:newsify/<digest>` reference; the
/// digest is stable for identical content. Snapshots are previewed through
/// their own data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn for_file(file: &ImageFile) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(file.bytes());
        let result = hasher.finalize();
        Self(format!("blob:newsify/{}", hex::encode(&result[..16])))
    }

    pub fn for_data_url(url: &DataUrl) -> Self {
        Self(url.as_str().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
