//! Hex-level distance convenience.

use serde::{Deserialize, Serialize};
use swatch_core::HexColor;
use swatch_convert::hex_to_lab;

use crate::{delta_e76, delta_e2000};

/// The two distances the comparison views render side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDistance {
    /// CIEDE2000 difference (the number QC decisions key off).
    pub delta_e2000: f64,
    /// CIE76 difference (legacy displays still show it).
    pub delta_e76: f64,
}

impl ColorDistance {
    /// Both distances at infinity: the untrusted-comparison marker.
    pub const UNTRUSTED: Self = Self {
        delta_e2000: f64::INFINITY,
        delta_e76: f64::INFINITY,
    };
}

/// Compares two hex literals, flagging untrusted comparisons.
///
/// Any argument that normalizes to the black sentinel - malformed input
/// AND genuinely black `#000000`, which the lossy pipeline cannot tell
/// apart - produces [`ColorDistance::UNTRUSTED`] (both fields infinite),
/// meaning "do not trust this comparison". Callers that need to compare
/// against real black must go through [`HexColor::parse`] and the Lab
/// metrics directly.
///
/// # Example
///
/// ```rust
/// use swatch_deltae::color_distance;
///
/// let same = color_distance("#FFFFFF", "#ffffff");
/// assert_eq!(same.delta_e2000, 0.0);
///
/// let untrusted = color_distance("#000000", "#FFFFFF");
/// assert!(untrusted.delta_e2000.is_infinite());
/// ```
pub fn color_distance(hex1: &str, hex2: &str) -> ColorDistance {
    let h1 = HexColor::normalize_lossy(hex1);
    let h2 = HexColor::normalize_lossy(hex2);
    if h1.is_sentinel() || h2.is_sentinel() {
        return ColorDistance::UNTRUSTED;
    }
    let lab1 = hex_to_lab(h1.as_str());
    let lab2 = hex_to_lab(h2.as_str());
    ColorDistance {
        delta_e2000: delta_e2000(lab1, lab2),
        delta_e76: delta_e76(lab1, lab2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_colors() {
        let d = color_distance("#FFFFFF", "#FFFFFF");
        assert_eq!(d.delta_e2000, 0.0);
        assert_eq!(d.delta_e76, 0.0);
    }

    #[test]
    fn test_case_and_shorthand_insensitive() {
        let d = color_distance("#ff8800", "#F80");
        assert_eq!(d.delta_e2000, 0.0);
    }

    #[test]
    fn test_invalid_input_is_untrusted() {
        let d = color_distance("garbage", "#FFFFFF");
        assert!(d.delta_e2000.is_infinite());
        assert!(d.delta_e76.is_infinite());
    }

    #[test]
    fn test_black_conflates_with_invalid() {
        // Black IS the invalid sentinel; a literal #000000 argument is
        // treated as untrusted. Known ambiguity, preserved on purpose.
        let d = color_distance("#000000", "#FFFFFF");
        assert_eq!(d, ColorDistance::UNTRUSTED);
    }

    #[test]
    fn test_near_black_is_trusted() {
        let d = color_distance("#010101", "#FFFFFF");
        assert!(d.delta_e2000.is_finite());
        assert!(d.delta_e76 > 90.0);
    }
}
