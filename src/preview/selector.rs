//! Best preview-size selection.
//!
//! Candidates are ranked by pixel area (largest first) and filtered by
//! [`PreviewBounds`]. An exact match with the target wins outright;
//! otherwise the candidate whose aspect ratio is closest to the target's is
//! chosen. The target is expected in landscape form, so portrait candidates
//! are compared with their sides swapped.

use super::{Dimensions, PreviewBounds};
use std::fmt::Write as _;

/// Errors raised for malformed selector input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("invalid {role} dimensions {size}: width and height must be positive")]
    InvalidDimension {
        /// Which input was rejected ("target", "fallback" or "candidate").
        role: &'static str,
        /// The offending value.
        size: Dimensions,
    },
    #[error("invalid preview bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: u64, max: u64 },
}

/// How a preview size was arrived at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionKind {
    /// A candidate matched the target exactly (after orientation swap).
    Exact,
    /// Closest aspect ratio among the candidates in bounds.
    Closest {
        /// Absolute difference between candidate and target aspect ratios.
        ratio_diff: f64,
    },
    /// No usable candidate; the caller's default was returned.
    Fallback,
}

/// Result of a preview-size selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSelection {
    /// Chosen resolution, in the candidate's own orientation.
    pub size: Dimensions,
    /// How it was chosen.
    pub kind: SelectionKind,
}

impl PreviewSelection {
    fn new(size: Dimensions, kind: SelectionKind) -> Self {
        Self { size, kind }
    }

    /// Returns true if the fallback default was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, SelectionKind::Fallback)
    }
}

/// Selects the best preview size for a target rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewSizeSelector {
    bounds: PreviewBounds,
}

impl PreviewSizeSelector {
    /// Creates a selector with custom area bounds.
    pub fn new(bounds: PreviewBounds) -> Self {
        Self { bounds }
    }

    /// Returns the configured bounds.
    pub fn bounds(&self) -> &PreviewBounds {
        &self.bounds
    }

    /// Picks the best preview size.
    ///
    /// `target` must already be in landscape form. An empty candidate list,
    /// or one where nothing survives the area filter, yields `fallback`.
    pub fn select(
        &self,
        target: Dimensions,
        candidates: &[Dimensions],
        fallback: Dimensions,
    ) -> Result<PreviewSelection, SelectionError> {
        self.validate(target, fallback)?;
        for candidate in candidates {
            reject_degenerate("candidate", *candidate)?;
        }

        // Stable sort: equal areas keep their reported order
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|a, b| b.area().cmp(&a.area()));

        if tracing::enabled!(tracing::Level::INFO) {
            let mut listing = String::new();
            for size in &sorted {
                let _ = write!(listing, "{} ", size);
            }
            tracing::info!("Supported preview sizes: {}", listing.trim_end());
        }

        let mut best: Option<(Dimensions, RatioDistance)> = None;

        for candidate in sorted {
            if !self.bounds.contains(&candidate) {
                tracing::trace!(%candidate, "Candidate outside area bounds");
                continue;
            }

            let normalized = candidate.landscape();
            if normalized == target {
                tracing::info!(
                    "Found preview size exactly matching screen size: {}",
                    candidate
                );
                return Ok(PreviewSelection::new(candidate, SelectionKind::Exact));
            }

            let distance = RatioDistance::between(normalized, target);
            match best {
                Some((_, ref best_distance)) if !distance.is_closer_than(best_distance) => {}
                _ => best = Some((candidate, distance)),
            }
        }

        let selection = match best {
            Some((size, distance)) => PreviewSelection::new(
                size,
                SelectionKind::Closest {
                    ratio_diff: distance.to_f64(),
                },
            ),
            None => {
                tracing::info!("No suitable preview sizes, using default: {}", fallback);
                PreviewSelection::new(fallback, SelectionKind::Fallback)
            }
        };

        tracing::info!("Found best approximate preview size: {}", selection.size);
        Ok(selection)
    }

    /// Returns `fallback` without consulting any candidates.
    ///
    /// For devices that report no preview sizes at all. Inputs are validated
    /// the same way as in [`select`](Self::select).
    pub fn select_default(
        &self,
        target: Dimensions,
        fallback: Dimensions,
    ) -> Result<PreviewSelection, SelectionError> {
        self.validate(target, fallback)?;
        Ok(PreviewSelection::new(fallback, SelectionKind::Fallback))
    }

    fn validate(&self, target: Dimensions, fallback: Dimensions) -> Result<(), SelectionError> {
        if !self.bounds.is_valid() {
            return Err(SelectionError::InvalidBounds {
                min: self.bounds.min_pixels,
                max: self.bounds.max_pixels,
            });
        }
        reject_degenerate("target", target)?;
        reject_degenerate("fallback", fallback)
    }
}

/// Exact distance between two aspect ratios, `|w*th - h*tw| / (h*th)`.
///
/// Compared as an unreduced fraction: candidates on opposite sides of the
/// target at the same distance must compare equal.
#[derive(Debug, Clone, Copy)]
struct RatioDistance {
    numerator: u128,
    denominator: u128,
}

impl RatioDistance {
    fn between(candidate: Dimensions, target: Dimensions) -> Self {
        let cross_candidate = u128::from(candidate.width) * u128::from(target.height);
        let cross_target = u128::from(candidate.height) * u128::from(target.width);
        Self {
            numerator: cross_candidate.abs_diff(cross_target),
            denominator: u128::from(candidate.height) * u128::from(target.height),
        }
    }

    /// Strictly smaller than `other`. Both sides stay below 2^128: each
    /// factor is under 2^64.
    fn is_closer_than(&self, other: &Self) -> bool {
        self.numerator * other.denominator < other.numerator * self.denominator
    }

    fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

fn reject_degenerate(role: &'static str, size: Dimensions) -> Result<(), SelectionError> {
    if size.is_degenerate() {
        return Err(SelectionError::InvalidDimension { role, size });
    }
    Ok(())
}
