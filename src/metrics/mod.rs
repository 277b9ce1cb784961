//! Prometheus metrics for camera configuration.
//!
//! # Metrics Exposed
//!
//! ## Preview Selection
//! - `scanner_camera_preview_selections_total{outcome}` - Selections by
//!   outcome (`exact`, `closest`, `fallback`)
//! - `scanner_camera_preview_width_pixels` - Width of the last selection
//! - `scanner_camera_preview_height_pixels` - Height of the last selection
//!
//! ## Device Configuration
//! - `scanner_camera_configurations_total` - Successful parameter writes
//! - `scanner_camera_configuration_failures_total` - Rejected parameter writes
//! - `scanner_camera_torch_lit` - Current torch state (1=lit, 0=off)
//!
//! # Example
//!
//! ```no_run
//! use scanner_camera::metrics::MetricsRegistry;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.record_torch(true);
//! println!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
