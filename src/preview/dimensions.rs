//! Pixel resolution type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pixel resolution, `width x height`.
///
/// Two values are equal iff both fields match; orientation is not
/// normalized implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Creates a resolution from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns true if either side is zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns true if the resolution is taller than it is wide.
    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// Returns the resolution with width and height exchanged.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Returns the landscape form: portrait values are swapped, others
    /// returned unchanged.
    pub fn landscape(&self) -> Self {
        if self.is_portrait() {
            self.swapped()
        } else {
            *self
        }
    }

    /// Width divided by height.
    ///
    /// Callers must reject degenerate values first; a zero height yields
    /// infinity.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error parsing a `WIDTHxHEIGHT` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDimensionsError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (w, h) = s
            .split_once(&['x', 'X'][..])
            .ok_or_else(|| ParseDimensionsError::MissingSeparator(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| ParseDimensionsError::InvalidNumber(part.to_string()))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_does_not_overflow() {
        let huge = Dimensions::new(u32::MAX, u32::MAX);
        assert_eq!(huge.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_landscape_swaps_portrait_only() {
        assert_eq!(Dimensions::new(480, 640).landscape(), Dimensions::new(640, 480));
        assert_eq!(Dimensions::new(640, 480).landscape(), Dimensions::new(640, 480));
        // Square stays as is
        assert_eq!(Dimensions::new(500, 500).landscape(), Dimensions::new(500, 500));
    }

    #[test]
    fn test_parse_and_display() {
        let dims: Dimensions = "1920x1080".parse().unwrap();
        assert_eq!(dims, Dimensions::new(1920, 1080));
        assert_eq!(dims.to_string(), "1920x1080");

        let spaced: Dimensions = " 640 X 480 ".parse().unwrap();
        assert_eq!(spaced, Dimensions::new(640, 480));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "1920".parse::<Dimensions>(),
            Err(ParseDimensionsError::MissingSeparator(_))
        ));
        assert!(matches!(
            "axb".parse::<Dimensions>(),
            Err(ParseDimensionsError::InvalidNumber(_))
        ));
        assert!(matches!(
            "-1x5".parse::<Dimensions>(),
            Err(ParseDimensionsError::InvalidNumber(_))
        ));
    }
}
