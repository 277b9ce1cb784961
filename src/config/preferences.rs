//! User-facing scanner preferences.

use serde::{Deserialize, Serialize};

/// Front light (torch) preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontLightMode {
    /// Always on while scanning.
    On,
    /// Toggled by ambient light; starts off.
    Auto,
    /// Always off.
    #[default]
    Off,
}

impl FrontLightMode {
    /// Whether the torch should be lit when the camera is configured.
    pub fn initially_lit(&self) -> bool {
        matches!(self, FrontLightMode::On)
    }
}

/// Preferences that drive camera configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanPreferences {
    /// Use an autofocus mode when the device offers one.
    pub auto_focus: bool,
    /// Prefer single-shot autofocus over continuous modes.
    pub disable_continuous_focus: bool,
    /// Apply a negative color effect to scan light-on-dark codes.
    pub invert_scan: bool,
    /// Torch behaviour.
    pub front_light_mode: FrontLightMode,
}

impl Default for ScanPreferences {
    fn default() -> Self {
        Self {
            auto_focus: true,
            disable_continuous_focus: false,
            invert_scan: false,
            front_light_mode: FrontLightMode::Off,
        }
    }
}
