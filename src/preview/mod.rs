//! Preview resolution selection.
//!
//! Picks the camera preview size that best approximates the display's
//! aspect ratio, restricted to a sane pixel-area range. Everything here is
//! pure: no device access, no shared state.

mod bounds;
mod dimensions;
mod selector;

pub use bounds::{PreviewBounds, DEFAULT_MAX_PREVIEW_PIXELS, DEFAULT_MIN_PREVIEW_PIXELS};
pub use dimensions::{Dimensions, ParseDimensionsError};
pub use selector::{PreviewSelection, PreviewSizeSelector, SelectionError, SelectionKind};
