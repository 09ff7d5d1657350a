//! Still-capture provider backed by `nokhwa`.
//!
//! Opens the device fresh for each shot, grabs a single frame, JPEG-encodes
//! it at the requested quality, and parks the bytes in the [`ImageStore`].
//! The core receives an opaque `mem://` handle only.

use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use nokhwa::pixel_format::RgbAFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType, Resolution};
use nokhwa::Camera;
use parking_lot::Mutex;

use photo_capture_core::{
    CameraDescriptor, CameraFacing, CameraProvider, CaptureError, CaptureOptions, ImageResource,
};

use crate::image_store::ImageStore;

/// Cross-platform camera backend.
///
/// Holds no open device between captures, so the preview pipeline of a host
/// UI can own the stream; a still capture borrows the device just long
/// enough for one frame.
pub struct NokhwaCamera {
    facing: Mutex<CameraFacing>,
    store: Arc<ImageStore>,
}

impl NokhwaCamera {
    pub fn new() -> Self {
        Self::with_store(Arc::new(ImageStore::new()))
    }

    /// Share an existing image store, e.g. one the host UI also reads.
    pub fn with_store(store: Arc<ImageStore>) -> Self {
        Self {
            facing: Mutex::new(CameraFacing::Back),
            store,
        }
    }

    /// The store that owns the bytes behind captured handles.
    pub fn image_store(&self) -> Arc<ImageStore> {
        Arc::clone(&self.store)
    }

    /// Enumerate attached camera devices.
    pub fn list_cameras() -> Vec<CameraDescriptor> {
        match nokhwa::query(ApiBackend::Auto) {
            Ok(devices) => devices
                .iter()
                .enumerate()
                .map(|(index, info)| CameraDescriptor {
                    id: index.to_string(),
                    name: info.human_name().to_string(),
                    facing: if index == 0 {
                        CameraFacing::Back
                    } else {
                        CameraFacing::Front
                    },
                    is_default: index == 0,
                })
                .collect(),
            Err(e) => {
                log::warn!("failed to enumerate cameras: {e}");
                Vec::new()
            }
        }
    }

    // Desktop hosts expose no facing metadata; the first device acts as the
    // back camera and the second, when present, as the front.
    fn device_index(facing: CameraFacing) -> u32 {
        match facing {
            CameraFacing::Back => 0,
            CameraFacing::Front => {
                let count = nokhwa::query(ApiBackend::Auto)
                    .map(|devices| devices.len())
                    .unwrap_or(0);
                if count > 1 {
                    1
                } else {
                    0
                }
            }
        }
    }

    /// Open the device, stepping down through format requests until one is
    /// accepted.
    fn open_camera(index: u32) -> Result<Camera, CaptureError> {
        let index = CameraIndex::Index(index);

        let requested =
            RequestedFormat::new::<RgbAFormat>(RequestedFormatType::AbsoluteHighestResolution);
        match Camera::new(index.clone(), requested) {
            Ok(camera) => return Ok(camera),
            Err(e) => log::warn!("camera rejected highest-resolution format: {e}"),
        }

        let requested = RequestedFormat::new::<RgbAFormat>(RequestedFormatType::HighestResolution(
            Resolution::new(640, 480),
        ));
        match Camera::new(index.clone(), requested) {
            Ok(camera) => return Ok(camera),
            Err(e) => log::warn!("camera rejected 640x480 format: {e}"),
        }

        let requested = RequestedFormat::new::<RgbAFormat>(RequestedFormatType::None);
        Camera::new(index, requested)
            .map_err(|e| CaptureError::CaptureFailed(format!("failed to open camera: {e}")))
    }
}

impl Default for NokhwaCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraProvider for NokhwaCamera {
    fn is_available(&self) -> bool {
        nokhwa::query(ApiBackend::Auto)
            .map(|devices| !devices.is_empty())
            .unwrap_or(false)
    }

    fn device_info(&self) -> CameraDescriptor {
        let facing = self.facing();
        let index = Self::device_index(facing);
        let name = nokhwa::query(ApiBackend::Auto)
            .ok()
            .and_then(|devices| {
                devices
                    .get(index as usize)
                    .map(|info| info.human_name().to_string())
            })
            .unwrap_or_else(|| "unknown camera".to_string());
        CameraDescriptor {
            id: index.to_string(),
            name,
            facing,
            is_default: index == 0,
        }
    }

    fn facing(&self) -> CameraFacing {
        *self.facing.lock()
    }

    fn set_facing(&self, facing: CameraFacing) {
        *self.facing.lock() = facing;
    }

    fn capture_still(&self, options: &CaptureOptions) -> Result<ImageResource, CaptureError> {
        options
            .validate()
            .map_err(CaptureError::InvalidConfiguration)?;
        if !self.is_available() {
            return Err(CaptureError::DeviceNotAvailable);
        }

        let mut camera = Self::open_camera(Self::device_index(self.facing()))?;
        camera
            .open_stream()
            .map_err(|e| CaptureError::CaptureFailed(format!("failed to open stream: {e}")))?;

        let frame = camera
            .frame()
            .map_err(|e| CaptureError::CaptureFailed(format!("failed to grab frame: {e}")))?;
        let resolution = frame.resolution();
        let rgba = frame
            .decode_image::<RgbAFormat>()
            .map_err(|e| CaptureError::CaptureFailed(format!("failed to decode frame: {e}")))?
            .into_raw();

        if let Err(e) = camera.stop_stream() {
            log::warn!("failed to stop camera stream: {e}");
        }

        let bytes = encode_jpeg(
            &rgba,
            resolution.width(),
            resolution.height(),
            options.quality,
        )?;
        let inline = options.include_image_data.then(|| bytes.clone());
        let uri = self.store.insert(bytes);
        log::debug!(
            "captured {}x{} still into {uri}",
            resolution.width(),
            resolution.height()
        );

        Ok(ImageResource {
            uri,
            width: resolution.width(),
            height: resolution.height(),
            data: inline,
        })
    }
}

/// JPEG-encode an RGBA frame at a 0.0–1.0 quality.
fn encode_jpeg(rgba: &[u8], width: u32, height: u32, quality: f32) -> Result<Vec<u8>, CaptureError> {
    let rgba = image::RgbaImage::from_raw(width, height, rgba.to_vec())
        .ok_or_else(|| CaptureError::CaptureFailed("frame size does not match resolution".into()))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality));
    rgb.write_with_encoder(encoder)
        .map_err(|e| CaptureError::CaptureFailed(format!("jpeg encoding failed: {e}")))?;
    Ok(bytes)
}

/// Map the 0.0–1.0 option scale onto the encoder's 1–100 scale.
fn jpeg_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_quality_maps_and_clamps() {
        assert_eq!(jpeg_quality(0.8), 80);
        assert_eq!(jpeg_quality(1.0), 100);
        assert_eq!(jpeg_quality(0.0), 1);
        assert_eq!(jpeg_quality(0.004), 1);
    }

    #[test]
    fn encode_jpeg_produces_a_jpeg_stream() {
        // 4x4 opaque gradient frame.
        let rgba: Vec<u8> = (0..4 * 4)
            .flat_map(|i| [i as u8 * 16, 0, 255 - i as u8 * 16, 255])
            .collect();

        let bytes = encode_jpeg(&rgba, 4, 4, 0.8).unwrap();
        assert!(bytes.len() > 2);
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn encode_jpeg_rejects_mismatched_dimensions() {
        let err = encode_jpeg(&[0; 8], 4, 4, 0.8).unwrap_err();
        assert!(matches!(err, CaptureError::CaptureFailed(_)));
    }
}
