//! Reads camera capabilities and applies scanner settings.

use super::{orientation_setter, settable::find_settable_value};
use crate::config::{FileConfig, ScanPreferences};
use crate::device::{
    CameraDevice, CameraParameters, ColorEffect, DeviceError, FlashMode, FocusMode, Rotation,
};
use crate::preview::{Dimensions, PreviewSelection, PreviewSizeSelector, SelectionError};
use thiserror::Error;

/// Errors raised while configuring a camera.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("device error: no camera parameters are available")]
    NoParameters,
    #[error("camera configuration not initialized from device")]
    NotInitialized,
    #[error("preview size selection failed: {0}")]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Configures a camera for barcode scanning.
///
/// Usage is two-phase: [`init_from_device`](Self::init_from_device) reads
/// the screen and the device's capabilities once and picks a preview size,
/// then [`set_desired_parameters`](Self::set_desired_parameters) writes the
/// full configuration. The device handle is borrowed per call and never
/// retained.
#[derive(Debug, Clone)]
pub struct CameraConfigurationManager {
    selector: PreviewSizeSelector,
    preferences: ScanPreferences,
    orientation: Rotation,
    screen_size: Option<Dimensions>,
    selection: Option<PreviewSelection>,
}

impl CameraConfigurationManager {
    /// Creates a manager with default bounds and a 90 degree display rotation.
    pub fn new(preferences: ScanPreferences) -> Self {
        Self {
            selector: PreviewSizeSelector::default(),
            preferences,
            orientation: Rotation::Deg90,
            screen_size: None,
            selection: None,
        }
    }

    /// Creates a manager from a loaded configuration file.
    pub fn from_config(config: &FileConfig) -> Self {
        Self::new(config.preferences.clone())
            .with_selector(PreviewSizeSelector::new(config.preview))
            .with_orientation(config.display.orientation)
    }

    /// Replaces the preview-size selector.
    pub fn with_selector(mut self, selector: PreviewSizeSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets the display rotation applied during configuration.
    pub fn with_orientation(mut self, orientation: Rotation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Current preferences.
    pub fn preferences(&self) -> &ScanPreferences {
        &self.preferences
    }

    /// Screen size recorded by the last successful initialization.
    pub fn screen_size(&self) -> Option<Dimensions> {
        self.screen_size
    }

    /// Preview size chosen by the last successful initialization.
    pub fn camera_resolution(&self) -> Option<Dimensions> {
        self.selection.map(|s| s.size)
    }

    /// Full outcome of the last preview-size selection.
    pub fn last_selection(&self) -> Option<PreviewSelection> {
        self.selection
    }

    /// Reads, once, the values from the device that configuration needs.
    ///
    /// `screen` may be in either orientation; it is normalized to landscape
    /// before matching against preview sizes.
    pub fn init_from_device(
        &mut self,
        device: &dyn CameraDevice,
        screen: Dimensions,
    ) -> Result<PreviewSelection, ConfigurationError> {
        let params = device
            .parameters()
            .ok_or(ConfigurationError::NoParameters)?;
        tracing::info!("Screen resolution: {}", screen);

        let target = screen.landscape();
        let selection = match params.supported_preview_sizes {
            Some(ref sizes) => self.selector.select(target, sizes, params.preview_size)?,
            None => {
                tracing::warn!("Device returned no supported preview sizes; using default");
                self.selector.select_default(target, params.preview_size)?
            }
        };

        self.screen_size = Some(screen);
        self.selection = Some(selection);
        tracing::info!("Camera resolution: {}", selection.size);
        Ok(selection)
    }

    /// Applies focus, torch, color effect, preview size and orientation.
    ///
    /// In safe mode only conservative settings are attempted. A device that
    /// reports no parameters is left untouched.
    pub fn set_desired_parameters(
        &self,
        device: &mut dyn CameraDevice,
        safe_mode: bool,
    ) -> Result<(), ConfigurationError> {
        let Some(mut params) = device.parameters() else {
            tracing::warn!(
                "Device error: no camera parameters are available. Proceeding without configuration."
            );
            return Ok(());
        };
        let selection = self.selection.ok_or(ConfigurationError::NotInitialized)?;

        tracing::info!("Initial camera parameters: {}", params.flatten());
        if safe_mode {
            tracing::warn!("In camera config safe mode -- most settings will not be honored");
        }

        apply_torch(&mut params, self.preferences.front_light_mode.initially_lit());

        if let Some(mode) = self.choose_focus_mode(&params, safe_mode) {
            params.focus_mode = Some(mode);
        }

        if self.preferences.invert_scan {
            if let Some(effect) = find_settable_value(
                params.supported_color_effects.as_deref(),
                &[ColorEffect::Negative],
            ) {
                params.color_effect = Some(effect);
            }
        }

        params.preview_size = selection.size;

        match orientation_setter(device.orientation_support()) {
            Some(set_orientation) => set_orientation(&mut *device, self.orientation)?,
            None => tracing::debug!("Device cannot rotate its display; skipping orientation"),
        }

        device.set_parameters(&params)?;
        tracing::info!("Final camera parameters: {}", params.flatten());
        Ok(())
    }

    /// Returns true if the device's flash is lit (on or torch).
    pub fn torch_state(&self, device: &dyn CameraDevice) -> bool {
        device
            .parameters()
            .and_then(|p| p.flash_mode)
            .is_some_and(|mode| mode.is_lit())
    }

    /// Turns the torch on or off.
    pub fn set_torch(
        &self,
        device: &mut dyn CameraDevice,
        on: bool,
    ) -> Result<(), ConfigurationError> {
        let mut params = device
            .parameters()
            .ok_or(ConfigurationError::NoParameters)?;
        apply_torch(&mut params, on);
        device.set_parameters(&params)?;
        tracing::info!(on, "Torch updated");
        Ok(())
    }

    fn choose_focus_mode(&self, params: &CameraParameters, safe_mode: bool) -> Option<FocusMode> {
        let supported = params.supported_focus_modes.as_deref();
        let mut mode = None;

        if self.preferences.auto_focus {
            mode = if safe_mode || self.preferences.disable_continuous_focus {
                find_settable_value(supported, &[FocusMode::Auto])
            } else {
                find_settable_value(
                    supported,
                    &[
                        FocusMode::ContinuousPicture,
                        FocusMode::ContinuousVideo,
                        FocusMode::Auto,
                    ],
                )
            };
        }

        // Autofocus requested but unavailable, or not requested at all
        if !safe_mode && mode.is_none() {
            mode = find_settable_value(supported, &[FocusMode::Macro, FocusMode::Edof]);
        }
        mode
    }
}

impl Default for CameraConfigurationManager {
    fn default() -> Self {
        Self::new(ScanPreferences::default())
    }
}

fn apply_torch(params: &mut CameraParameters, on: bool) {
    let supported = params.supported_flash_modes.as_deref();
    let mode = if on {
        find_settable_value(supported, &[FlashMode::Torch, FlashMode::On])
    } else {
        find_settable_value(supported, &[FlashMode::Off])
    };
    if let Some(mode) = mode {
        params.flash_mode = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontLightMode;
    use crate::device::{MockDevice, OrientationSupport};
    use crate::preview::{PreviewBounds, SelectionKind};

    fn initialized(prefs: ScanPreferences, device: &MockDevice) -> CameraConfigurationManager {
        let mut manager = CameraConfigurationManager::new(prefs);
        manager
            .init_from_device(device, Dimensions::new(1080, 1920))
            .unwrap();
        manager
    }

    #[test]
    fn test_init_normalizes_portrait_screen() {
        let device = MockDevice::typical();
        let mut manager = CameraConfigurationManager::default();

        let selection = manager
            .init_from_device(&device, Dimensions::new(1080, 1920))
            .unwrap();

        assert_eq!(selection.size, Dimensions::new(1920, 1080));
        assert_eq!(selection.kind, SelectionKind::Exact);
        assert_eq!(manager.screen_size(), Some(Dimensions::new(1080, 1920)));
        assert_eq!(manager.camera_resolution(), Some(Dimensions::new(1920, 1080)));
    }

    #[test]
    fn test_init_without_size_list_uses_default() {
        let params = CameraParameters::with_preview_size(Dimensions::new(352, 288));
        let device = MockDevice::new(params);
        let mut manager = CameraConfigurationManager::default();

        let selection = manager
            .init_from_device(&device, Dimensions::new(720, 1280))
            .unwrap();

        assert_eq!(selection.size, Dimensions::new(352, 288));
        assert!(selection.is_fallback());
    }

    #[test]
    fn test_init_without_size_list_still_validates_screen() {
        let params = CameraParameters::with_preview_size(Dimensions::new(352, 288));
        let device = MockDevice::new(params);
        let mut manager = CameraConfigurationManager::default();

        assert!(matches!(
            manager.init_from_device(&device, Dimensions::new(720, 0)),
            Err(ConfigurationError::Selection(SelectionError::InvalidDimension { .. }))
        ));
        assert!(manager.camera_resolution().is_none());
    }

    #[test]
    fn test_init_without_parameters_fails() {
        let device = MockDevice::without_parameters();
        let mut manager = CameraConfigurationManager::default();

        assert!(matches!(
            manager.init_from_device(&device, Dimensions::new(720, 1280)),
            Err(ConfigurationError::NoParameters)
        ));
        assert!(manager.camera_resolution().is_none());
    }

    #[test]
    fn test_init_rejects_zero_screen() {
        let device = MockDevice::typical();
        let mut manager = CameraConfigurationManager::default();

        assert!(matches!(
            manager.init_from_device(&device, Dimensions::new(0, 1280)),
            Err(ConfigurationError::Selection(SelectionError::InvalidDimension { .. }))
        ));
        assert!(manager.screen_size().is_none());
    }

    #[test]
    fn test_custom_bounds_change_selection() {
        let device = MockDevice::typical();
        let mut manager = CameraConfigurationManager::default()
            .with_selector(PreviewSizeSelector::new(PreviewBounds::new(150_400, 1_000_000)));

        let selection = manager
            .init_from_device(&device, Dimensions::new(1080, 1920))
            .unwrap();

        // 1920x1080 is out of bounds; 1280x720 has the same ratio
        assert_eq!(selection.size, Dimensions::new(1280, 720));
    }

    #[test]
    fn test_set_before_init_fails() {
        let mut device = MockDevice::typical();
        let manager = CameraConfigurationManager::default();

        assert!(matches!(
            manager.set_desired_parameters(&mut device, false),
            Err(ConfigurationError::NotInitialized)
        ));
        assert_eq!(device.parameter_writes(), 0);
    }

    #[test]
    fn test_set_without_parameters_is_noop() {
        let mut device = MockDevice::without_parameters();
        let manager = CameraConfigurationManager::default();

        assert!(manager.set_desired_parameters(&mut device, false).is_ok());
        assert_eq!(device.orientation(), None);
    }

    #[test]
    fn test_default_configuration() {
        let mut device = MockDevice::typical();
        let manager = initialized(ScanPreferences::default(), &device);

        manager.set_desired_parameters(&mut device, false).unwrap();

        let params = device.parameters().unwrap();
        assert_eq!(params.preview_size, Dimensions::new(1920, 1080));
        assert_eq!(params.focus_mode, Some(FocusMode::ContinuousPicture));
        assert_eq!(params.flash_mode, Some(FlashMode::Off));
        assert_eq!(params.color_effect, Some(ColorEffect::None));
        assert_eq!(device.orientation(), Some(Rotation::Deg90));
        assert_eq!(device.parameter_writes(), 1);
    }

    #[test]
    fn test_safe_mode_uses_plain_autofocus() {
        let mut device = MockDevice::typical();
        let manager = initialized(ScanPreferences::default(), &device);

        manager.set_desired_parameters(&mut device, true).unwrap();

        assert_eq!(device.parameters().unwrap().focus_mode, Some(FocusMode::Auto));
    }

    #[test]
    fn test_disable_continuous_focus() {
        let mut device = MockDevice::typical();
        let prefs = ScanPreferences {
            disable_continuous_focus: true,
            ..Default::default()
        };
        let manager = initialized(prefs, &device);

        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(device.parameters().unwrap().focus_mode, Some(FocusMode::Auto));
    }

    #[test]
    fn test_autofocus_off_falls_back_to_macro() {
        let mut device = MockDevice::typical();
        let prefs = ScanPreferences {
            auto_focus: false,
            ..Default::default()
        };
        let manager = initialized(prefs, &device);

        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(device.parameters().unwrap().focus_mode, Some(FocusMode::Macro));
    }

    #[test]
    fn test_safe_mode_skips_macro_fallback() {
        let mut params = CameraParameters::with_preview_size(Dimensions::new(640, 480));
        params.focus_mode = Some(FocusMode::Fixed);
        params.supported_focus_modes = Some(vec![FocusMode::Fixed, FocusMode::Edof]);
        let mut device = MockDevice::new(params);
        let manager = initialized(ScanPreferences::default(), &device);

        manager.set_desired_parameters(&mut device, true).unwrap();
        assert_eq!(device.parameters().unwrap().focus_mode, Some(FocusMode::Fixed));

        manager.set_desired_parameters(&mut device, false).unwrap();
        assert_eq!(device.parameters().unwrap().focus_mode, Some(FocusMode::Edof));
    }

    #[test]
    fn test_front_light_on_lights_torch() {
        let mut device = MockDevice::typical();
        let prefs = ScanPreferences {
            front_light_mode: FrontLightMode::On,
            ..Default::default()
        };
        let manager = initialized(prefs, &device);

        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(device.parameters().unwrap().flash_mode, Some(FlashMode::Torch));
        assert!(manager.torch_state(&device));
    }

    #[test]
    fn test_invert_scan_sets_negative() {
        let mut device = MockDevice::typical();
        let prefs = ScanPreferences {
            invert_scan: true,
            ..Default::default()
        };
        let manager = initialized(prefs, &device);

        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(
            device.parameters().unwrap().color_effect,
            Some(ColorEffect::Negative)
        );
    }

    #[test]
    fn test_native_orientation_failure_propagates() {
        let mut device = MockDevice::typical().failing_orientation();
        let manager = initialized(ScanPreferences::default(), &device);

        assert!(matches!(
            manager.set_desired_parameters(&mut device, false),
            Err(ConfigurationError::Device(_))
        ));
        assert_eq!(device.parameter_writes(), 0);
    }

    #[test]
    fn test_legacy_orientation_failure_ignored() {
        let mut device = MockDevice::typical()
            .with_orientation_support(OrientationSupport::Legacy)
            .failing_orientation();
        let manager = initialized(ScanPreferences::default(), &device);

        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(device.orientation(), None);
        assert_eq!(device.parameter_writes(), 1);
    }

    #[test]
    fn test_unsupported_orientation_skipped() {
        let mut device =
            MockDevice::typical().with_orientation_support(OrientationSupport::Unsupported);
        let manager = initialized(ScanPreferences::default(), &device).with_orientation(Rotation::Deg270);

        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(device.orientation(), None);
        assert_eq!(device.parameter_writes(), 1);
    }

    #[test]
    fn test_torch_toggle() {
        let mut device = MockDevice::typical();
        let manager = CameraConfigurationManager::default();

        assert!(!manager.torch_state(&device));

        manager.set_torch(&mut device, true).unwrap();
        assert!(manager.torch_state(&device));

        manager.set_torch(&mut device, false).unwrap();
        assert!(!manager.torch_state(&device));
    }

    #[test]
    fn test_torch_falls_back_to_flash_on() {
        let mut params = CameraParameters::with_preview_size(Dimensions::new(640, 480));
        params.flash_mode = Some(FlashMode::Off);
        params.supported_flash_modes = Some(vec![FlashMode::Off, FlashMode::On]);
        let mut device = MockDevice::new(params);
        let manager = CameraConfigurationManager::default();

        manager.set_torch(&mut device, true).unwrap();

        assert_eq!(device.parameters().unwrap().flash_mode, Some(FlashMode::On));
        assert!(manager.torch_state(&device));
    }

    #[test]
    fn test_torch_state_without_parameters() {
        let device = MockDevice::without_parameters();
        assert!(!CameraConfigurationManager::default().torch_state(&device));
    }

    #[test]
    fn test_from_config() {
        let config = FileConfig::from_toml(
            "[preview]\nmax_pixels = 921600\n[display]\norientation = 0\n",
        )
        .unwrap();
        let mut device = MockDevice::typical();
        let mut manager = CameraConfigurationManager::from_config(&config);

        manager
            .init_from_device(&device, Dimensions::new(1080, 1920))
            .unwrap();
        manager.set_desired_parameters(&mut device, false).unwrap();

        assert_eq!(manager.camera_resolution(), Some(Dimensions::new(1280, 720)));
        assert_eq!(device.orientation(), Some(Rotation::Deg0));
    }
}
