//! Camera parameter snapshot and mode enums.
//!
//! Mode names match the string values camera stacks report (`"torch"`,
//! `"continuous-picture"`, ...), so they round-trip through config files and
//! logs unchanged.

use crate::preview::Dimensions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Focus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusMode {
    Auto,
    ContinuousPicture,
    ContinuousVideo,
    Macro,
    Edof,
    Fixed,
    Infinity,
}

impl FocusMode {
    /// Platform name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusMode::Auto => "auto",
            FocusMode::ContinuousPicture => "continuous-picture",
            FocusMode::ContinuousVideo => "continuous-video",
            FocusMode::Macro => "macro",
            FocusMode::Edof => "edof",
            FocusMode::Fixed => "fixed",
            FocusMode::Infinity => "infinity",
        }
    }
}

/// Flash mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashMode {
    Off,
    On,
    Torch,
    Auto,
    RedEye,
}

impl FlashMode {
    /// Platform name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashMode::Off => "off",
            FlashMode::On => "on",
            FlashMode::Torch => "torch",
            FlashMode::Auto => "auto",
            FlashMode::RedEye => "red-eye",
        }
    }

    /// Returns true if the mode keeps the light lit.
    pub fn is_lit(&self) -> bool {
        matches!(self, FlashMode::On | FlashMode::Torch)
    }
}

/// Color effect applied to preview frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorEffect {
    None,
    Mono,
    Negative,
    Sepia,
}

impl ColorEffect {
    /// Platform name of the effect.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorEffect::None => "none",
            ColorEffect::Mono => "mono",
            ColorEffect::Negative => "negative",
            ColorEffect::Sepia => "sepia",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(FocusMode, FlashMode, ColorEffect);

/// Clockwise display rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl TryFrom<u32> for Rotation {
    type Error = String;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("rotation must be 0, 90, 180 or 270, got {}", other)),
        }
    }
}

impl From<Rotation> for u32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Snapshot of a camera's settable parameters.
///
/// `supported_*` lists are `None` when the device does not report them,
/// which is distinct from reporting an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraParameters {
    /// Current preview size; also the fallback for preview selection.
    pub preview_size: Dimensions,
    /// Preview sizes the sensor can stream.
    pub supported_preview_sizes: Option<Vec<Dimensions>>,
    /// Current focus mode.
    pub focus_mode: Option<FocusMode>,
    /// Focus modes the device accepts.
    pub supported_focus_modes: Option<Vec<FocusMode>>,
    /// Current flash mode.
    pub flash_mode: Option<FlashMode>,
    /// Flash modes the device accepts.
    pub supported_flash_modes: Option<Vec<FlashMode>>,
    /// Current color effect.
    pub color_effect: Option<ColorEffect>,
    /// Color effects the device accepts.
    pub supported_color_effects: Option<Vec<ColorEffect>>,
}

impl CameraParameters {
    /// Parameters with only a preview size and nothing else reported.
    pub fn with_preview_size(preview_size: Dimensions) -> Self {
        Self {
            preview_size,
            supported_preview_sizes: None,
            focus_mode: None,
            supported_focus_modes: None,
            flash_mode: None,
            supported_flash_modes: None,
            color_effect: None,
            supported_color_effects: None,
        }
    }

    /// Renders the parameters as `key=value;` pairs for diagnostics.
    pub fn flatten(&self) -> String {
        fn join<T: fmt::Display>(values: &[T]) -> String {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }

        let mut pairs = vec![format!("preview-size={}", self.preview_size)];
        if let Some(ref sizes) = self.supported_preview_sizes {
            pairs.push(format!("preview-size-values={}", join(sizes)));
        }
        if let Some(mode) = self.focus_mode {
            pairs.push(format!("focus-mode={}", mode));
        }
        if let Some(ref modes) = self.supported_focus_modes {
            pairs.push(format!("focus-mode-values={}", join(modes)));
        }
        if let Some(mode) = self.flash_mode {
            pairs.push(format!("flash-mode={}", mode));
        }
        if let Some(ref modes) = self.supported_flash_modes {
            pairs.push(format!("flash-mode-values={}", join(modes)));
        }
        if let Some(effect) = self.color_effect {
            pairs.push(format!("effect={}", effect));
        }
        if let Some(ref effects) = self.supported_color_effects {
            pairs.push(format!("effect-values={}", join(effects)));
        }
        pairs.join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_lit_modes() {
        assert!(FlashMode::On.is_lit());
        assert!(FlashMode::Torch.is_lit());
        assert!(!FlashMode::Off.is_lit());
        assert!(!FlashMode::Auto.is_lit());
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::try_from(90), Ok(Rotation::Deg90));
        assert!(Rotation::try_from(45).is_err());
        assert_eq!(u32::from(Rotation::Deg270), 270);
    }

    #[test]
    fn test_flatten() {
        let mut params = CameraParameters::with_preview_size(Dimensions::new(640, 480));
        params.supported_preview_sizes =
            Some(vec![Dimensions::new(1280, 720), Dimensions::new(640, 480)]);
        params.supported_focus_modes =
            Some(vec![FocusMode::Auto, FocusMode::ContinuousPicture]);
        params.flash_mode = Some(FlashMode::Off);

        assert_eq!(
            params.flatten(),
            "preview-size=640x480;preview-size-values=1280x720,640x480;\
             focus-mode-values=auto,continuous-picture;flash-mode=off"
        );
    }
}
