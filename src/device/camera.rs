//! Camera device abstraction.
//!
//! The configuration layer never owns hardware. A driver layer opens the
//! device, hands it in as a [`CameraDevice`], and releases it afterwards.
//! [`MockDevice`] stands in for hardware in tests and the CLI.

use super::{CameraParameters, Rotation};
use crate::preview::Dimensions;
use thiserror::Error;

/// Errors reported by a camera device.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("camera rejected parameters: {0}")]
    Rejected(String),
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("camera backend error: {0}")]
    Backend(String),
}

/// How a device supports setting the display orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationSupport {
    /// The call is part of the device's stable API; failures are real errors.
    Native,
    /// The call exists only on some firmware revisions; failures are ignored.
    Legacy,
    /// Orientation cannot be set at all.
    Unsupported,
}

/// A camera whose parameters can be read and written.
pub trait CameraDevice {
    /// Reads the current parameters, or `None` if the device reports none.
    fn parameters(&self) -> Option<CameraParameters>;

    /// Writes parameters back to the device.
    fn set_parameters(&mut self, params: &CameraParameters) -> Result<(), DeviceError>;

    /// Reports how display orientation can be set on this device.
    fn orientation_support(&self) -> OrientationSupport;

    /// Rotates the preview display clockwise.
    fn set_display_orientation(&mut self, rotation: Rotation) -> Result<(), DeviceError>;
}

/// In-memory camera for testing.
#[derive(Debug, Clone)]
pub struct MockDevice {
    params: Option<CameraParameters>,
    orientation_support: OrientationSupport,
    orientation: Option<Rotation>,
    fail_orientation: bool,
    writes: u64,
}

impl MockDevice {
    /// Creates a mock reporting the given parameters.
    pub fn new(params: CameraParameters) -> Self {
        Self {
            params: Some(params),
            orientation_support: OrientationSupport::Native,
            orientation: None,
            fail_orientation: false,
            writes: 0,
        }
    }

    /// Creates a mock that reports no parameters at all.
    pub fn without_parameters() -> Self {
        Self {
            params: None,
            orientation_support: OrientationSupport::Native,
            orientation: None,
            fail_orientation: false,
            writes: 0,
        }
    }

    /// A typical phone camera: common preview sizes, continuous focus and
    /// torch support.
    pub fn typical() -> Self {
        use super::{ColorEffect, FlashMode, FocusMode};

        let mut params = CameraParameters::with_preview_size(Dimensions::new(640, 480));
        params.supported_preview_sizes = Some(vec![
            Dimensions::new(1920, 1080),
            Dimensions::new(1280, 720),
            Dimensions::new(800, 480),
            Dimensions::new(640, 480),
            Dimensions::new(320, 240),
        ]);
        params.focus_mode = Some(FocusMode::Auto);
        params.supported_focus_modes = Some(vec![
            FocusMode::Auto,
            FocusMode::ContinuousPicture,
            FocusMode::ContinuousVideo,
            FocusMode::Macro,
        ]);
        params.flash_mode = Some(FlashMode::Off);
        params.supported_flash_modes =
            Some(vec![FlashMode::Off, FlashMode::On, FlashMode::Torch, FlashMode::Auto]);
        params.color_effect = Some(ColorEffect::None);
        params.supported_color_effects = Some(vec![ColorEffect::None, ColorEffect::Negative]);
        Self::new(params)
    }

    /// Sets how the mock advertises orientation support.
    pub fn with_orientation_support(mut self, support: OrientationSupport) -> Self {
        self.orientation_support = support;
        self
    }

    /// Makes every orientation call fail.
    pub fn failing_orientation(mut self) -> Self {
        self.fail_orientation = true;
        self
    }

    /// Last orientation successfully applied.
    pub fn orientation(&self) -> Option<Rotation> {
        self.orientation
    }

    /// Number of successful parameter writes.
    pub fn parameter_writes(&self) -> u64 {
        self.writes
    }
}

impl CameraDevice for MockDevice {
    fn parameters(&self) -> Option<CameraParameters> {
        self.params.clone()
    }

    fn set_parameters(&mut self, params: &CameraParameters) -> Result<(), DeviceError> {
        let current = self
            .params
            .as_ref()
            .ok_or_else(|| DeviceError::Unavailable("no parameters".to_string()))?;

        if let Some(ref sizes) = current.supported_preview_sizes {
            if !sizes.contains(&params.preview_size) && params.preview_size != current.preview_size
            {
                return Err(DeviceError::Rejected(format!(
                    "unsupported preview size {}",
                    params.preview_size
                )));
            }
        }

        self.params = Some(params.clone());
        self.writes += 1;
        tracing::debug!("MockDevice parameters set: {}", params.flatten());
        Ok(())
    }

    fn orientation_support(&self) -> OrientationSupport {
        self.orientation_support
    }

    fn set_display_orientation(&mut self, rotation: Rotation) -> Result<(), DeviceError> {
        if self.fail_orientation || self.orientation_support == OrientationSupport::Unsupported {
            return Err(DeviceError::Backend(
                "setDisplayOrientation not available".to_string(),
            ));
        }
        self.orientation = Some(rotation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::FlashMode;

    #[test]
    fn test_mock_device_roundtrip() {
        let mut device = MockDevice::typical();
        let mut params = device.parameters().unwrap();
        params.flash_mode = Some(FlashMode::Torch);

        device.set_parameters(&params).unwrap();

        assert_eq!(device.parameters().unwrap().flash_mode, Some(FlashMode::Torch));
        assert_eq!(device.parameter_writes(), 1);
    }

    #[test]
    fn test_mock_rejects_unsupported_preview() {
        let mut device = MockDevice::typical();
        let mut params = device.parameters().unwrap();
        params.preview_size = Dimensions::new(1000, 1000);

        assert!(matches!(
            device.set_parameters(&params),
            Err(DeviceError::Rejected(_))
        ));
        assert_eq!(device.parameter_writes(), 0);
    }

    #[test]
    fn test_mock_without_parameters() {
        let mut device = MockDevice::without_parameters();
        assert!(device.parameters().is_none());
        assert!(matches!(
            device.set_parameters(&CameraParameters::with_preview_size(Dimensions::new(1, 1))),
            Err(DeviceError::Unavailable(_))
        ));
    }

    #[test]
    fn test_mock_orientation() {
        let mut device = MockDevice::typical();
        device.set_display_orientation(Rotation::Deg90).unwrap();
        assert_eq!(device.orientation(), Some(Rotation::Deg90));

        let mut failing = MockDevice::typical().failing_orientation();
        assert!(failing.set_display_orientation(Rotation::Deg90).is_err());
        assert_eq!(failing.orientation(), None);
    }
}
