use crate::models::camera::{CameraDescriptor, CameraFacing};
use crate::models::error::CaptureError;
use crate::models::options::CaptureOptions;
use crate::models::photo::ImageResource;

/// Interface for platform-specific still-camera backends.
///
/// Implemented by:
/// - `NokhwaCamera` (cross-platform, `photo-capture-nokhwa`)
/// - In-test fakes driving the capture pipeline
pub trait CameraProvider: Send + Sync {
    /// Whether a usable camera device is currently present.
    fn is_available(&self) -> bool;

    /// Information about the device backing this provider.
    fn device_info(&self) -> CameraDescriptor;

    /// The physical camera currently selected.
    fn facing(&self) -> CameraFacing;

    /// Switch between back and front cameras. Takes effect on the next
    /// capture.
    fn set_facing(&self, facing: CameraFacing);

    /// Take one still photo.
    ///
    /// Blocks until the device produces a frame or fails; this is the only
    /// suspension point in the capture pipeline. The returned resource is
    /// owned by the platform image cache — callers hold the handle only.
    fn capture_still(&self, options: &CaptureOptions) -> Result<ImageResource, CaptureError>;
}
