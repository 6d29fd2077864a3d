//! Hex literal compositions.
//!
//! Thin adapters between the hex surface the UI deals in and the typed
//! conversions. The lossy sentinel convention applies throughout: any
//! string that fails validation behaves as `#000000` from here on down.

use swatch_core::{HexColor, Lab, Rgb};

use crate::lab::{lab_to_rgb, rgb_to_lab};

/// Parses a hex literal to 8-bit RGB; non-normalizable input yields black.
pub fn hex_to_rgb(s: &str) -> Rgb {
    let [r, g, b] = HexColor::normalize_lossy(s).channels();
    Rgb::new(r, g, b)
}

/// Formats 8-bit RGB as a normalized hex literal.
///
/// Always 7 characters including `#`, lowercase.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor::from_channels([rgb.r, rgb.g, rgb.b])
}

/// Hex literal straight to Lab.
pub fn hex_to_lab(s: &str) -> Lab {
    rgb_to_lab(hex_to_rgb(s))
}

/// Lab straight to a hex literal, clamping out-of-gamut values.
pub fn lab_to_hex(lab: Lab) -> HexColor {
    rgb_to_hex(lab_to_rgb(lab))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("#f80"), Rgb::new(255, 136, 0));
    }

    #[test]
    fn test_invalid_hex_is_black() {
        assert_eq!(hex_to_rgb("nope"), Rgb::new(0, 0, 0));
        assert_eq!(hex_to_rgb("#1234"), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_rgb_hex_roundtrip() {
        for hex in ["#000000", "#ffffff", "#e4002b", "#00b7bd", "#7f7f7f"] {
            let rgb = hex_to_rgb(hex);
            assert_eq!(rgb_to_hex(rgb).as_str(), hex);
        }
    }

    #[test]
    fn test_hex_lab_composition() {
        let lab = hex_to_lab("#ffffff");
        assert!((lab.l - 100.0).abs() < 1e-6);
        assert_eq!(lab_to_hex(lab).as_str(), "#ffffff");
    }
}
