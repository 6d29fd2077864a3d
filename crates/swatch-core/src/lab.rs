//! CIE L\*a\*b\* coordinates.
//!
//! [`Lab`] is the perceptual workhorse of the workspace: conversions land
//! here, every ΔE metric consumes it, and the reference table stores it.
//!
//! # Ranges
//!
//! L\* is nominally [0, 100]; a\*/b\* are nominally [-128, 127]. None of
//! the components are hard-clamped - gamut mapping can overshoot the
//! nominal ranges slightly and callers must tolerate that rather than
//! reject it.
//!
//! # Non-finite input
//!
//! Components are not validated. NaN and ±∞ propagate deterministically
//! through every downstream formula under IEEE semantics; rejecting them
//! is the caller's job if stricter guarantees are needed.

use serde::{Deserialize, Serialize};

/// A CIE L\*a\*b\* color value.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
///
/// let lab = Lab::new(54.29, 80.81, 69.89);
/// assert!(lab.chroma() > 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, nominally [0, 100].
    pub l: f64,
    /// Green-red axis, nominally [-128, 127].
    pub a: f64,
    /// Blue-yellow axis, nominally [-128, 127].
    pub b: f64,
}

impl Lab {
    /// Creates a Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: the radial distance from the neutral axis, √(a\*² + b\*²).
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in degrees, in [0, 360).
    ///
    /// Neutral colors (a\* = b\* = 0) report 0.
    #[inline]
    pub fn hue_degrees(self) -> f64 {
        if self.a == 0.0 && self.b == 0.0 {
            return 0.0;
        }
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }
}

impl From<(f64, f64, f64)> for Lab {
    fn from((l, a, b): (f64, f64, f64)) -> Self {
        Self::new(l, a, b)
    }
}
