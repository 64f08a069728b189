//! Camera permission state and errors.

use std::fmt;

/// Message shown when camera access was refused.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Please enable camera permissions in your system settings to use the camera.";

/// Outcome of the last camera permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPermission {
    /// Permission has not been requested yet
    #[default]
    Unknown,
    /// Access granted; the camera may be activated
    Granted,
    /// Access refused or camera unavailable
    Denied,
}

impl CameraPermission {
    pub fn is_granted(&self) -> bool {
        matches!(self, CameraPermission::Granted)
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// Camera permission denied
    PermissionDenied,
    /// Capture requested while the camera is not active
    NotActive,
    /// The device returned no frame
    NoFrame,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "{}", PERMISSION_DENIED_MESSAGE),
            CameraError::NotActive => write!(f, "Camera is not active"),
            CameraError::NoFrame => write!(f, "Failed to capture a frame"),
        }
    }
}

impl std::error::Error for CameraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_default_unknown() {
        assert_eq!(CameraPermission::default(), CameraPermission::Unknown);
        assert!(!CameraPermission::Unknown.is_granted());
        assert!(!CameraPermission::Denied.is_granted());
        assert!(CameraPermission::Granted.is_granted());
    }

    #[test]
    fn test_camera_error_display() {
        assert!(format!("{}", CameraError::PermissionDenied).contains("enable camera permissions"));
        assert_eq!(format!("{}", CameraError::NotActive), "Camera is not active");
        assert_eq!(format!("{}", CameraError::NoFrame), "Failed to capture a frame");
    }
}
