use crate::models::error::CaptureError;
use crate::models::photo::CapturedPhoto;

/// Event sink for capture session notifications.
///
/// Methods are invoked on whatever thread runs the capture, after the
/// gallery mutation has landed and the single-flight gate has been
/// released. Implementations should marshal to the UI thread if needed.
pub trait CaptureDelegate: Send + Sync {
    /// A capture completed; the photo is already in the gallery.
    fn on_photo_captured(&self, photo: &CapturedPhoto);

    /// A capture attempt failed; the gallery is unchanged.
    fn on_capture_error(&self, error: &CaptureError);

    /// The gallery contents changed (capture, delete, clear).
    fn on_gallery_changed(&self, photos: &[CapturedPhoto]);
}
