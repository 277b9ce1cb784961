//! Scanner preferences and configuration files.
//!
//! Preferences are plain values supplied by the caller; where they are
//! persisted is the host application's business. A TOML file can provide
//! them along with preview bounds and display orientation.

mod file;
mod preferences;

pub use file::{ConfigError, DisplayConfig, FileConfig};
pub use preferences::{FrontLightMode, ScanPreferences};
