//! # photo-capture-core
//!
//! Platform-agnostic photo capture core library.
//!
//! Provides the overlay catalog, selection state, single-flight capture
//! session, and in-memory gallery behind a single-screen camera UI.
//! Platform-specific backends (cross-platform `nokhwa`, future mobile
//! bindings) implement the `CameraProvider` trait and plug into the generic
//! `CaptureSession`.
//!
//! Overlays are cosmetic: a translucent color wash rendered over the live
//! preview or a stored thumbnail, never a pixel transformation. The gallery
//! is in-memory only and lost on process exit.
//!
//! ## Architecture
//!
//! ```text
//! photo-capture-core (this crate)
//! ├── traits/       ← CameraProvider, CaptureDelegate
//! ├── models/       ← CaptureError, CapturedPhoto, ImageResource, CaptureOptions, camera models
//! ├── overlay/      ← OverlayCatalog, SelectionState
//! ├── session/      ← CaptureGuard, CaptureSession (single-flight orchestrator)
//! └── gallery/      ← GalleryStore (newest-first, snapshot reads)
//! ```

pub mod gallery;
pub mod models;
pub mod overlay;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use gallery::GalleryStore;
pub use models::camera::{CameraDescriptor, CameraFacing, PermissionStatus};
pub use models::error::CaptureError;
pub use models::options::CaptureOptions;
pub use models::photo::{CapturedPhoto, ImageResource, PhotoMetadata};
pub use overlay::catalog::{Overlay, OverlayCatalog, OverlayTint};
pub use overlay::selection::SelectionState;
pub use session::capture::CaptureSession;
pub use session::guard::{CaptureGuard, CapturePermit};
pub use traits::camera_provider::CameraProvider;
pub use traits::capture_delegate::CaptureDelegate;
