//! Camera devices and their parameters.
//!
//! This module defines the seam between the configuration logic and the
//! camera driver layer: a trait for reading and writing parameters, the
//! parameter snapshot itself, and a mock implementation for testing.

mod camera;
#[cfg(feature = "camera")]
mod native;
mod params;

pub use camera::{CameraDevice, DeviceError, MockDevice, OrientationSupport};
#[cfg(feature = "camera")]
pub use native::NokhwaDevice;
pub use params::{CameraParameters, ColorEffect, FlashMode, FocusMode, Rotation};
