use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Opaque reference to an image produced by the device camera.
///
/// The bytes behind the handle are owned by the platform image cache; this
/// core never interprets them. `data` carries an inline copy only when the
/// capture options asked for one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResource {
    pub uri: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub data: Option<Vec<u8>>,
}

impl ImageResource {
    pub fn new(uri: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            uri: uri.into(),
            width,
            height,
            data: None,
        }
    }
}

/// One user capture: the image handle plus the overlay that was active at
/// the moment the shutter fired.
///
/// The overlay key is copied by value from the selection — changing the
/// selection afterwards never alters photos already in the gallery.
/// Immutable after creation; removed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedPhoto {
    pub id: String,
    pub image: ImageResource,
    pub overlay: String,
    pub created_at: DateTime<Utc>,
    /// Local clock time of the capture, preformatted for display.
    pub taken_at: String,
}

impl CapturedPhoto {
    /// Build a photo record for a capture that just completed.
    ///
    /// Mints a fresh unique identifier; captures are serialized by the
    /// guard, so no two live photos can ever share one.
    pub fn new(image: ImageResource, overlay: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            image,
            overlay: overlay.into(),
            created_at: Utc::now(),
            taken_at: Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn metadata(&self) -> PhotoMetadata {
        PhotoMetadata {
            id: self.id.clone(),
            uri: self.image.uri.clone(),
            width: self.image.width,
            height: self.image.height,
            overlay: self.overlay.clone(),
            created_at: self.created_at.to_rfc3339(),
            taken_at: self.taken_at.clone(),
        }
    }
}

/// Flat, serializable description of a captured photo.
///
/// This is the shape handed to the rendering layer's bridge; it never
/// includes pixel data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoMetadata {
    pub id: String,
    pub uri: String,
    pub width: u32,
    pub height: u32,
    pub overlay: String,
    pub created_at: String,
    pub taken_at: String,
}
