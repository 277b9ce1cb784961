//! Camera configuration for scanning.
//!
//! Combines preview-size selection with the scanner's focus, torch, color
//! and orientation preferences, and writes the result to a camera device.

mod manager;
mod orientation;
mod settable;

pub use manager::{CameraConfigurationManager, ConfigurationError};
pub use orientation::{orientation_setter, OrientationSetter};
pub use settable::find_settable_value;
