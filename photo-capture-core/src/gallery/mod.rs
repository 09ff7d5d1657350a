//! In-memory gallery of captured photos.
//!
//! Newest-first, unique identifiers, no persistence — contents are lost on
//! process exit. Every mutation returns the resulting snapshot so callers
//! never observe a partially-applied change.

use parking_lot::Mutex;

use crate::models::error::CaptureError;
use crate::models::photo::{CapturedPhoto, PhotoMetadata};

/// Ordered collection of captured photos, owned exclusively by this store.
///
/// Shared via `Arc` between the capture pipeline and the rendering layer;
/// the interior lock serializes mutations arriving from different threads.
#[derive(Debug, Default)]
pub struct GalleryStore {
    photos: Mutex<Vec<CapturedPhoto>>,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly captured photo at the front.
    ///
    /// An identifier collision means the pipeline's uniqueness guarantee was
    /// broken upstream; the store refuses the insert and stays consistent.
    pub fn prepend(&self, photo: CapturedPhoto) -> Result<Vec<CapturedPhoto>, CaptureError> {
        let mut photos = self.photos.lock();
        if photos.iter().any(|p| p.id == photo.id) {
            log::error!("rejected duplicate photo identifier {}", photo.id);
            return Err(CaptureError::DuplicateIdentifier(photo.id));
        }
        photos.insert(0, photo);
        Ok(photos.clone())
    }

    /// Remove the photo with the given identifier. Removing an absent
    /// identifier is a no-op, so deletion is idempotent.
    pub fn remove_by_id(&self, id: &str) -> Vec<CapturedPhoto> {
        let mut photos = self.photos.lock();
        photos.retain(|p| p.id != id);
        photos.clone()
    }

    /// Drop every photo.
    pub fn clear(&self) -> Vec<CapturedPhoto> {
        let mut photos = self.photos.lock();
        photos.clear();
        photos.clone()
    }

    /// Current contents, newest first.
    pub fn snapshot(&self) -> Vec<CapturedPhoto> {
        self.photos.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.photos.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.lock().is_empty()
    }

    /// Serialized metadata for the rendering layer's bridge, newest first.
    pub fn metadata_json(&self) -> Result<String, CaptureError> {
        let metadata: Vec<PhotoMetadata> =
            self.photos.lock().iter().map(CapturedPhoto::metadata).collect();
        serde_json::to_string(&metadata).map_err(|e| CaptureError::Unknown(e.to_string()))
    }
}
