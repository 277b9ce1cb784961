//! Scanner Camera Configuration Library
//!
//! Configures a camera for barcode scanning: picks a preview resolution that
//! matches the display, then applies focus, torch, color effect and display
//! orientation settings the scanner prefers.
//!
//! # Architecture
//!
//! ```text
//! config (preferences, bounds) ──┐
//!                                ├→ configuration manager → CameraDevice
//! preview (size selection) ──────┘            ↓
//!                                          metrics
//! ```
//!
//! The manager never opens or closes hardware. A driver layer owns the
//! device and lends it to the manager through the [`CameraDevice`] trait.
//!
//! # Example
//!
//! ```no_run
//! use scanner_camera::{
//!     configuration::CameraConfigurationManager,
//!     config::ScanPreferences,
//!     device::MockDevice,
//!     preview::Dimensions,
//! };
//!
//! let mut device = MockDevice::typical();
//! let mut manager = CameraConfigurationManager::new(ScanPreferences::default());
//!
//! // Portrait phone screen; normalized to landscape internally
//! let selection = manager
//!     .init_from_device(&device, Dimensions::new(1080, 1920))
//!     .unwrap();
//! println!("preview size: {}", selection.size);
//!
//! manager.set_desired_parameters(&mut device, false).unwrap();
//! manager.set_torch(&mut device, true).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod configuration;
pub mod device;
pub mod metrics;
pub mod preview;

// Re-export commonly used types at crate root
pub use config::{FileConfig, FrontLightMode, ScanPreferences};
pub use configuration::{CameraConfigurationManager, ConfigurationError};
pub use device::{CameraDevice, CameraParameters, MockDevice};
pub use preview::{Dimensions, PreviewBounds, PreviewSelection, PreviewSizeSelector};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
