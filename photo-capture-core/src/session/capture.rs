use std::sync::Arc;

use parking_lot::Mutex;

use crate::gallery::GalleryStore;
use crate::models::camera::CameraFacing;
use crate::models::error::CaptureError;
use crate::models::options::CaptureOptions;
use crate::models::photo::CapturedPhoto;
use crate::overlay::catalog::OverlayCatalog;
use crate::overlay::selection::SelectionState;
use crate::session::guard::CaptureGuard;
use crate::traits::camera_provider::CameraProvider;
use crate::traits::capture_delegate::CaptureDelegate;

/// Orchestrates a capture request end-to-end.
///
/// Generic over the device backend via the `CameraProvider` trait. Owns the
/// single-flight gate and wires the overlay catalog, selection state, and
/// gallery store together; the rendering layer reaches them through the
/// accessors below.
///
/// Data flow for one capture:
/// ```text
/// [Selection] ──snapshot──┐
///                          ├→ capture_still() → [CapturedPhoto] → [GalleryStore]
/// [CameraProvider] ────────┘                                          │
///                                                  [CaptureDelegate] ←┘
/// ```
pub struct CaptureSession<C: CameraProvider> {
    camera: C,
    guard: CaptureGuard,
    catalog: Arc<OverlayCatalog>,
    selection: Arc<SelectionState>,
    gallery: Arc<GalleryStore>,
    delegate: Option<Arc<dyn CaptureDelegate>>,
    options: Mutex<CaptureOptions>,
}

impl<C: CameraProvider> CaptureSession<C> {
    /// Build a session around a device backend, with the built-in overlay
    /// catalog, an empty gallery, and default capture options.
    pub fn new(camera: C) -> Self {
        let catalog = Arc::new(OverlayCatalog::builtin());
        let selection = Arc::new(SelectionState::new(Arc::clone(&catalog)));
        Self {
            camera,
            guard: CaptureGuard::new(),
            catalog,
            selection,
            gallery: Arc::new(GalleryStore::new()),
            delegate: None,
            options: Mutex::new(CaptureOptions::default()),
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn CaptureDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn set_options(&self, options: CaptureOptions) -> Result<(), CaptureError> {
        options
            .validate()
            .map_err(CaptureError::InvalidConfiguration)?;
        *self.options.lock() = options;
        Ok(())
    }

    pub fn options(&self) -> CaptureOptions {
        self.options.lock().clone()
    }

    pub fn catalog(&self) -> Arc<OverlayCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn selection(&self) -> Arc<SelectionState> {
        Arc::clone(&self.selection)
    }

    pub fn gallery(&self) -> Arc<GalleryStore> {
        Arc::clone(&self.gallery)
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Whether a capture currently holds the gate. Backs the UI's disabled
    /// shutter state.
    pub fn is_capturing(&self) -> bool {
        self.guard.is_busy()
    }

    pub fn facing(&self) -> CameraFacing {
        self.camera.facing()
    }

    /// Flip between back and front cameras; returns the new facing.
    pub fn toggle_facing(&self) -> CameraFacing {
        let facing = self.camera.facing().toggled();
        self.camera.set_facing(facing);
        facing
    }

    /// Take one still photo and publish it to the gallery.
    ///
    /// Fails fast with `AlreadyInProgress` while another capture is in
    /// flight — the request is rejected, not queued. On device failure the
    /// gallery is left unchanged. Exactly one gallery mutation happens per
    /// successful call, and the gate is released on every path before the
    /// delegate hears about the outcome.
    pub fn capture(&self) -> Result<CapturedPhoto, CaptureError> {
        let outcome = self.capture_inner();
        match &outcome {
            Ok((photo, snapshot)) => {
                if let Some(delegate) = &self.delegate {
                    delegate.on_photo_captured(photo);
                    delegate.on_gallery_changed(snapshot);
                }
            }
            Err(err) => {
                if let Some(delegate) = &self.delegate {
                    delegate.on_capture_error(err);
                }
            }
        }
        outcome.map(|(photo, _)| photo)
    }

    /// Guarded section. The permit drops on every exit path, including an
    /// error from the device call.
    fn capture_inner(&self) -> Result<(CapturedPhoto, Vec<CapturedPhoto>), CaptureError> {
        let _permit = self
            .guard
            .try_acquire()
            .ok_or(CaptureError::AlreadyInProgress)?;

        // Snapshot the selection before the device call; a selection change
        // while the shutter is busy must not retag this capture.
        let overlay = self.selection.current();
        let options = self.options.lock().clone();

        // Any device-side failure surfaces as CaptureFailed wrapping the
        // underlying cause.
        let image = self.camera.capture_still(&options).map_err(|err| {
            let err = match err {
                e @ CaptureError::CaptureFailed(_) => e,
                other => CaptureError::CaptureFailed(other.to_string()),
            };
            log::warn!("still capture failed: {err}");
            err
        })?;

        let photo = CapturedPhoto::new(image, overlay);
        let snapshot = self.gallery.prepend(photo.clone())?;
        log::debug!("captured photo {} with overlay {}", photo.id, photo.overlay);
        Ok((photo, snapshot))
    }

    /// Remove one photo and notify the delegate. Deleting an unknown
    /// identifier is a no-op.
    pub fn remove_photo(&self, id: &str) -> Vec<CapturedPhoto> {
        let snapshot = self.gallery.remove_by_id(id);
        self.notify_gallery(&snapshot);
        snapshot
    }

    /// Delete every photo and notify the delegate.
    pub fn clear_gallery(&self) -> Vec<CapturedPhoto> {
        let snapshot = self.gallery.clear();
        self.notify_gallery(&snapshot);
        snapshot
    }

    /// Tear down per-run state at application exit: empty the gallery and
    /// return the selection to its default.
    pub fn reset(&self) {
        self.gallery.clear();
        self.selection.reset();
    }

    fn notify_gallery(&self, snapshot: &[CapturedPhoto]) {
        if let Some(delegate) = &self.delegate {
            delegate.on_gallery_changed(snapshot);
        }
    }
}
