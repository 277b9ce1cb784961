//! Camera device backed by nokhwa.
//!
//! Only preview resolution is exposed; nokhwa has no portable notion of
//! focus modes, flash or color effects, so those lists are reported as
//! absent and the configuration manager leaves them alone.

use super::{CameraDevice, CameraParameters, DeviceError, OrientationSupport, Rotation};
use crate::preview::Dimensions;
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType, Resolution},
    Camera,
};

/// A native camera opened through nokhwa.
pub struct NokhwaDevice {
    camera: Camera,
    params: CameraParameters,
}

impl NokhwaDevice {
    /// Opens the camera at `index` and reads its supported resolutions.
    pub fn open(index: u32) -> Result<Self, DeviceError> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::None);
        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .map_err(|e| DeviceError::Unavailable(e.to_string()))?;

        let current = camera.camera_format().resolution();
        let mut params = CameraParameters::with_preview_size(Dimensions::new(
            current.width_x,
            current.height_y,
        ));

        match camera.compatible_camera_formats() {
            Ok(formats) => {
                let mut sizes: Vec<Dimensions> = Vec::with_capacity(formats.len());
                for format in formats {
                    let res = format.resolution();
                    let size = Dimensions::new(res.width_x, res.height_y);
                    // Formats repeat per frame rate and pixel format
                    if !sizes.contains(&size) {
                        sizes.push(size);
                    }
                }
                params.supported_preview_sizes = Some(sizes);
            }
            Err(e) => {
                tracing::warn!("Camera {} did not report formats: {}", index, e);
            }
        }

        tracing::info!("NokhwaDevice opened camera {}: {}", index, params.flatten());
        Ok(Self { camera, params })
    }
}

impl CameraDevice for NokhwaDevice {
    fn parameters(&self) -> Option<CameraParameters> {
        Some(self.params.clone())
    }

    fn set_parameters(&mut self, params: &CameraParameters) -> Result<(), DeviceError> {
        if params.preview_size != self.params.preview_size {
            let size = params.preview_size;
            self.camera
                .set_resolution(Resolution::new(size.width, size.height))
                .map_err(|e| DeviceError::Rejected(e.to_string()))?;
        }
        self.params.preview_size = params.preview_size;
        Ok(())
    }

    fn orientation_support(&self) -> OrientationSupport {
        OrientationSupport::Unsupported
    }

    fn set_display_orientation(&mut self, _rotation: Rotation) -> Result<(), DeviceError> {
        Err(DeviceError::Backend(
            "display orientation is not supported by nokhwa".to_string(),
        ))
    }
}
