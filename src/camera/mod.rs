//! Camera access for still-frame capture.
//!
//! This module provides:
//! - The [`CameraDevice`] capability used by the session
//! - A file-backed device via [`SnapshotCamera`]
//! - Permission state via [`CameraPermission`]

mod device;
mod snapshot;
mod types;

pub use device::CameraDevice;
pub use snapshot::SnapshotCamera;
pub use types::{CameraError, CameraPermission, PERMISSION_DENIED_MESSAGE};
