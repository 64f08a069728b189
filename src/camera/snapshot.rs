//! Camera device backed by a still-frame file.
//!
//! Webcam tools commonly keep the latest frame in a file on disk. The snapshot
//! camera treats that file as the device: access is granted when the file can
//! be opened, and each capture reads the current contents.

use std::path::{Path, PathBuf};

use super::device::CameraDevice;
use super::types::CameraPermission;
use crate::image::{mime_for_extension, DataUrl, CAPTURED_MIME_TYPE};

/// File-backed camera device.
#[derive(Debug, Clone)]
pub struct SnapshotCamera {
    source: PathBuf,
}

impl SnapshotCamera {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn frame_mime_type(&self) -> &'static str {
        self.source
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_for_extension)
            .unwrap_or(CAPTURED_MIME_TYPE)
    }
}

impl CameraDevice for SnapshotCamera {
    async fn request_permission(&mut self) -> CameraPermission {
        match tokio::fs::File::open(&self.source).await {
            Ok(_) => {
                log::info!("Camera access granted: {}", self.source.display());
                CameraPermission::Granted
            }
            Err(e) => {
                log::error!(
                    "Camera access denied or not available ({}): {}",
                    self.source.display(),
                    e
                );
                CameraPermission::Denied
            }
        }
    }

    async fn capture_frame(&mut self) -> Option<DataUrl> {
        match tokio::fs::read(&self.source).await {
            Ok(bytes) if !bytes.is_empty() => {
                log::debug!("Captured {} byte frame", bytes.len());
                Some(DataUrl::encode(self.frame_mime_type(), &bytes))
            }
            Ok(_) => {
                log::error!("Failed to capture screenshot: empty frame");
                None
            }
            Err(e) => {
                log::error!("Failed to capture screenshot: {}", e);
                None
            }
        }
    }
}
