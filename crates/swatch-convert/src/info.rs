//! Display bundle for a single color literal.

use serde::{Deserialize, Serialize};
use swatch_core::{Cmyk, HexColor, Lab, Rgb};

use crate::cmyk::rgb_to_cmyk;
use crate::hex::hex_to_rgb;
use crate::lab::rgb_to_lab;

/// Everything a swatch detail view renders for one color.
///
/// Serializable so the app layer can cache it alongside the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    /// Normalized hex literal (the sentinel for invalid input).
    pub hex: HexColor,
    /// 8-bit device RGB.
    pub rgb: Rgb,
    /// Derived process-ink percentages.
    pub cmyk: Cmyk,
    /// CIE Lab coordinates (D50).
    pub lab: Lab,
}

/// Computes the full display bundle for a hex literal.
///
/// Invalid input degrades to the black sentinel and produces black's
/// bundle, keeping the field always renderable.
///
/// # Example
///
/// ```rust
/// use swatch_convert::color_info;
///
/// let info = color_info("#FF0000");
/// assert_eq!(info.hex.as_str(), "#ff0000");
/// assert_eq!(info.cmyk.to_string(), "0/100/100/0");
/// ```
pub fn color_info(s: &str) -> ColorInfo {
    let hex = HexColor::normalize_lossy(s);
    let rgb = hex_to_rgb(hex.as_str());
    ColorInfo {
        cmyk: rgb_to_cmyk(rgb),
        lab: rgb_to_lab(rgb),
        hex,
        rgb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_consistency() {
        let info = color_info("#E4002B");
        assert_eq!(info.hex.as_str(), "#e4002b");
        assert_eq!(info.rgb, Rgb::new(228, 0, 43));
        assert_eq!(info.cmyk.m, 100);
        assert!(info.lab.a > 60.0);
    }

    #[test]
    fn test_invalid_input_is_black_bundle() {
        let info = color_info("pantone red");
        assert!(info.hex.is_sentinel());
        assert_eq!(info.rgb, Rgb::new(0, 0, 0));
        assert_eq!(info.cmyk, Cmyk::new(0, 0, 0, 100));
        assert!(info.lab.l.abs() < 1e-9);
    }
}
