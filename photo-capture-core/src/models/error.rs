use thiserror::Error;

/// Errors that can occur during photo capture operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// A capture was requested while another was in flight. Transient;
    /// the caller may retry once the in-flight capture resolves.
    #[error("capture already in progress")]
    AlreadyInProgress,

    /// The device camera reported an error. The gallery is left unchanged.
    #[error("capture failed: {0}")]
    CaptureFailed(String),

    /// An overlay key not present in the catalog was selected.
    #[error("unknown overlay: {0}")]
    UnknownOverlay(String),

    /// A photo with this identifier is already in the gallery. Internal
    /// invariant violation, not a user-facing condition.
    #[error("duplicate photo identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera device not available")]
    DeviceNotAvailable,

    #[error("unknown error: {0}")]
    Unknown(String),
}
