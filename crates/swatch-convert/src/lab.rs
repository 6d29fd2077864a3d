//! CIE L\*a\*b\* conversions.
//!
//! The Lab transform wraps the XYZ intermediate with the CIE f(t)
//! nonlinearity: a cube root above the junction constant, a linear
//! extension below it.
//!
//! # Constants
//!
//! - ε = 0.008856 - junction between the linear and cube-root branches
//! - κ = 903.3 - slope of the linear branch
//!
//! These are the classic published values; exact-rational variants
//! (216/24389, 24389/27) differ in the 7th decimal and would change
//! comparability with the instrument-facing tooling this library feeds.

use swatch_core::{Lab, Rgb};

use crate::srgb;
use crate::xyz::{D50_WHITE, linear_rgb_to_xyz, xyz_to_linear_rgb};

const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 903.3;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(ft: f64) -> f64 {
    let t = ft * ft * ft;
    if t > EPSILON { t } else { (116.0 * ft - 16.0) / KAPPA }
}

/// Converts XYZ (D50, Y normalized to 1) to Lab.
pub fn xyz_to_lab(xyz: [f64; 3]) -> Lab {
    let fx = lab_f(xyz[0] / D50_WHITE[0]);
    let fy = lab_f(xyz[1] / D50_WHITE[1]);
    let fz = lab_f(xyz[2] / D50_WHITE[2]);
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Converts Lab to XYZ (D50, Y normalized to 1).
pub fn lab_to_xyz(lab: Lab) -> [f64; 3] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    [
        lab_f_inv(fx) * D50_WHITE[0],
        lab_f_inv(fy) * D50_WHITE[1],
        lab_f_inv(fz) * D50_WHITE[2],
    ]
}

/// Converts 8-bit RGB to Lab through the D50 XYZ intermediate.
///
/// # Example
///
/// ```rust
/// use swatch_core::Rgb;
/// use swatch_convert::rgb_to_lab;
///
/// let white = rgb_to_lab(Rgb::new(255, 255, 255));
/// assert!((white.l - 100.0).abs() < 1e-6);
/// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
/// ```
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let [r, g, b] = rgb.to_normalized();
    let linear = [srgb::eotf(r), srgb::eotf(g), srgb::eotf(b)];
    xyz_to_lab(linear_rgb_to_xyz(linear))
}

/// Converts Lab to 8-bit RGB, clamping out-of-gamut channels.
///
/// Approximate inverse of [`rgb_to_lab`]: Lab values outside the sRGB
/// gamut clamp into [0, 255] and do not round-trip exactly.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let linear = xyz_to_linear_rgb(lab_to_xyz(lab));
    Rgb::from_f64(
        srgb::oetf(linear[0]) * 255.0,
        srgb::oetf(linear[1]) * 255.0,
        srgb::oetf(linear[2]) * 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primary_red() {
        let lab = rgb_to_lab(Rgb::new(255, 0, 0));
        assert_abs_diff_eq!(lab.l, 54.29, epsilon = 0.05);
        assert_abs_diff_eq!(lab.a, 80.81, epsilon = 0.15);
        assert_abs_diff_eq!(lab.b, 69.89, epsilon = 0.15);
    }

    #[test]
    fn test_gray_is_neutral() {
        let lab = rgb_to_lab(Rgb::new(128, 128, 128));
        assert_abs_diff_eq!(lab.l, 53.59, epsilon = 0.05);
        assert!(lab.a.abs() < 1e-6, "a = {}", lab.a);
        assert!(lab.b.abs() < 1e-6, "b = {}", lab.b);
    }

    #[test]
    fn test_black_and_white() {
        let black = rgb_to_lab(Rgb::new(0, 0, 0));
        assert_abs_diff_eq!(black.l, 0.0, epsilon = 1e-9);
        let white = rgb_to_lab(Rgb::new(255, 255, 255));
        assert_abs_diff_eq!(white.l, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rgb_roundtrip() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(12, 34, 56),
            Rgb::new(200, 150, 37),
            Rgb::new(1, 2, 3),
        ] {
            assert_eq!(lab_to_rgb(rgb_to_lab(rgb)), rgb);
        }
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        // Hyper-saturated green, far outside sRGB.
        let rgb = lab_to_rgb(Lab::new(85.0, -120.0, 90.0));
        // No panic, channels pinned to the cube; red floors at zero.
        assert_eq!(rgb.r, 0);
    }

    #[test]
    fn test_lab_xyz_roundtrip() {
        let lab = Lab::new(42.0, 15.5, -33.25);
        let back = xyz_to_lab(lab_to_xyz(lab));
        assert_abs_diff_eq!(back.l, lab.l, epsilon = 1e-9);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-9);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-9);
    }
}
