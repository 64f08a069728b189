//! The camera device capability.

use std::future::Future;

use super::types::CameraPermission;
use crate::image::DataUrl;

/// A camera the session can ask for permission and grab a frame from.
///
/// Permission is a binary outcome; failures to reach the device count as a
/// denial. Capturing yields `None` when the device produced no frame.
pub trait CameraDevice {
    /// Ask the host for access to the camera.
    fn request_permission(&mut self) -> impl Future<Output = CameraPermission> + Send;

    /// Grab a single still frame as a data URL.
    fn capture_frame(&mut self) -> impl Future<Output = Option<DataUrl>> + Send;
}
