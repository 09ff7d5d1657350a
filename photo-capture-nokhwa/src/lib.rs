//! # photo-capture-nokhwa
//!
//! Cross-platform device backend for photo-capture-kit.
//!
//! Binds the core's `CameraProvider` seam to real hardware via the `nokhwa`
//! crate: opens a device, grabs one frame, JPEG-encodes it at the requested
//! quality, parks the bytes in an in-process [`ImageStore`], and hands the
//! core an opaque `mem://` handle.
//!
//! ## Usage
//! ```ignore
//! use photo_capture_core::CaptureSession;
//! use photo_capture_nokhwa::NokhwaCamera;
//!
//! let camera = NokhwaCamera::new();
//! let store = camera.image_store();
//! let session = CaptureSession::new(camera);
//!
//! let photo = session.capture()?;
//! let bytes = store.resolve(&photo.image.uri);
//! ```

pub mod camera;
pub mod image_store;
pub mod permissions;

pub use camera::NokhwaCamera;
pub use image_store::{ImageStore, URI_SCHEME};
