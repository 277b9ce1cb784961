//! Pixel-area limits for preview candidates.
//!
//! The lower limit sits above the size of a small screen so that very low
//! resolutions are never picked by accident; such devices fall back to the
//! camera's default preview size instead.

use super::Dimensions;
use serde::{Deserialize, Serialize};

/// Default minimum preview area (a normal 470x320 screen).
pub const DEFAULT_MIN_PREVIEW_PIXELS: u64 = 470 * 320;

/// Default maximum preview area (1080p).
pub const DEFAULT_MAX_PREVIEW_PIXELS: u64 = 1920 * 1080;

/// Inclusive pixel-area range a preview candidate must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewBounds {
    /// Smallest acceptable width * height.
    pub min_pixels: u64,
    /// Largest acceptable width * height.
    pub max_pixels: u64,
}

impl Default for PreviewBounds {
    fn default() -> Self {
        Self {
            min_pixels: DEFAULT_MIN_PREVIEW_PIXELS,
            max_pixels: DEFAULT_MAX_PREVIEW_PIXELS,
        }
    }
}

impl PreviewBounds {
    /// Creates bounds from explicit limits.
    pub fn new(min_pixels: u64, max_pixels: u64) -> Self {
        Self {
            min_pixels,
            max_pixels,
        }
    }

    /// Returns true if the range is non-empty.
    pub fn is_valid(&self) -> bool {
        self.min_pixels <= self.max_pixels
    }

    /// Returns true if the candidate's area is within the range.
    #[inline]
    pub fn contains(&self, size: &Dimensions) -> bool {
        (self.min_pixels..=self.max_pixels).contains(&size.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let bounds = PreviewBounds::default();
        assert_eq!(bounds.min_pixels, 150_400);
        assert_eq!(bounds.max_pixels, 2_073_600);
        assert!(bounds.is_valid());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = PreviewBounds::default();
        assert!(bounds.contains(&Dimensions::new(470, 320)));
        assert!(bounds.contains(&Dimensions::new(1920, 1080)));
        assert!(!bounds.contains(&Dimensions::new(320, 240)));
        assert!(!bounds.contains(&Dimensions::new(2560, 1440)));
    }

    #[test]
    fn test_inverted_bounds_invalid() {
        assert!(!PreviewBounds::new(10, 5).is_valid());
    }
}
