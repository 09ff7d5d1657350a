/// Options passed to the device camera for a single still capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// Encoded image quality on a 0.0–1.0 scale (default: 0.8).
    pub quality: f32,

    /// Embed the encoded image bytes inline in the returned resource
    /// (default: false). The bytes stay in the platform image cache either
    /// way; this only controls whether a copy travels with the handle.
    pub include_image_data: bool,
}

impl CaptureOptions {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.quality) {
            return Err(format!("quality out of range: {}", self.quality));
        }
        Ok(())
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            quality: 0.8,
            include_image_data: false,
        }
    }
}
