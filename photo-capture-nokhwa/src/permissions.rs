//! Camera access probe.
//!
//! There is no portable camera-permission API on desktop hosts; attempting
//! to open the default device is the closest available signal. An open
//! failure on a present device is treated as denied access.

use nokhwa::pixel_format::RgbAFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use photo_capture_core::PermissionStatus;

/// Check whether camera access is currently possible.
///
/// The surrounding UI calls this before offering the shutter; the capture
/// pipeline itself assumes access has already been granted.
pub fn check_camera_permission() -> PermissionStatus {
    let devices = match nokhwa::query(ApiBackend::Auto) {
        Ok(devices) => devices,
        Err(e) => {
            log::warn!("camera enumeration failed during permission probe: {e}");
            return PermissionStatus::Undetermined;
        }
    };
    if devices.is_empty() {
        // No device behaves the same as no access.
        return PermissionStatus::Denied;
    }

    let requested = RequestedFormat::new::<RgbAFormat>(RequestedFormatType::None);
    match Camera::new(CameraIndex::Index(0), requested) {
        Ok(_) => PermissionStatus::Granted,
        Err(e) => {
            log::warn!("camera open failed during permission probe: {e}");
            PermissionStatus::Denied
        }
    }
}
