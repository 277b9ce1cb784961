//! Display orientation dispatch.
//!
//! Devices advertise whether orientation is a stable call, a call that only
//! some firmware revisions implement, or not available. The setter is chosen
//! once from that capability rather than looked up at call time.

use crate::device::{CameraDevice, DeviceError, OrientationSupport, Rotation};

/// Signature shared by the orientation setters.
pub type OrientationSetter = fn(&mut dyn CameraDevice, Rotation) -> Result<(), DeviceError>;

/// Selects the setter matching a device's capability.
///
/// Returns `None` when the device cannot rotate its display at all.
pub fn orientation_setter(support: OrientationSupport) -> Option<OrientationSetter> {
    match support {
        OrientationSupport::Native => Some(set_native as OrientationSetter),
        OrientationSupport::Legacy => Some(set_legacy as OrientationSetter),
        OrientationSupport::Unsupported => None,
    }
}

fn set_native(device: &mut dyn CameraDevice, rotation: Rotation) -> Result<(), DeviceError> {
    device.set_display_orientation(rotation)
}

fn set_legacy(device: &mut dyn CameraDevice, rotation: Rotation) -> Result<(), DeviceError> {
    if let Err(e) = device.set_display_orientation(rotation) {
        tracing::debug!("Legacy display orientation call failed, ignoring: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MockDevice;

    #[test]
    fn test_native_propagates_failure() {
        let mut device = MockDevice::typical().failing_orientation();
        let setter = orientation_setter(OrientationSupport::Native).unwrap();
        assert!(setter(&mut device, Rotation::Deg90).is_err());
    }

    #[test]
    fn test_legacy_swallows_failure() {
        let mut device = MockDevice::typical()
            .with_orientation_support(OrientationSupport::Legacy)
            .failing_orientation();
        let setter = orientation_setter(OrientationSupport::Legacy).unwrap();
        assert!(setter(&mut device, Rotation::Deg90).is_ok());
        assert_eq!(device.orientation(), None);
    }

    #[test]
    fn test_legacy_applies_when_available() {
        let mut device =
            MockDevice::typical().with_orientation_support(OrientationSupport::Legacy);
        let setter = orientation_setter(OrientationSupport::Legacy).unwrap();
        setter(&mut device, Rotation::Deg90).unwrap();
        assert_eq!(device.orientation(), Some(Rotation::Deg90));
    }

    #[test]
    fn test_unsupported_has_no_setter() {
        assert!(orientation_setter(OrientationSupport::Unsupported).is_none());
    }
}
