//! CIEDE2000 color difference.
//!
//! The full formula from CIE 142-2001 with every correction term: the
//! G-factor rebalancing of a\* near the neutral axis, hue-angle
//! arithmetic with 360° wraparound handling, the T hue-dependence term,
//! the Gaussian rotation weight centered at 275°, and the RT
//! chroma-hue interaction. No simplification is permitted here - any
//! deviation breaks comparability with physical instrument readings.
//!
//! Implementation follows Sharma, Wu & Dalal, "The CIEDE2000
//! Color-Difference Formula: Implementation Notes, Supplementary Test
//! Data, and Mathematical Observations" (2005); the test table below is
//! theirs.

use swatch_core::Lab;

const POW25_7: f64 = 6_103_515_625.0; // 25^7

/// Hue angle of (a, b) in degrees, in [0, 360); 0 for the neutral axis.
#[inline]
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// ΔE₀₀: the CIEDE2000 color difference.
///
/// Symmetric in its arguments (unlike CIE94) and the formula print QC
/// standardizes on. Validated against the published Sharma reference
/// pairs to 1e-4.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
/// use swatch_deltae::delta_e2000;
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((delta_e2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn delta_e2000(lab1: Lab, lab2: Lab) -> f64 {
    // Step 1: rebalanced a', C', h'.
    let c_bar = 0.5 * (lab1.chroma() + lab2.chroma());
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let ap1 = (1.0 + g) * lab1.a;
    let ap2 = (1.0 + g) * lab2.a;
    let cp1 = ap1.hypot(lab1.b);
    let cp2 = ap2.hypot(lab2.b);
    let hp1 = hue_angle(ap1, lab1.b);
    let hp2 = hue_angle(ap2, lab2.b);

    // Step 2: deltas. Hue deltas wrap into (-180, 180]; a zero-chroma
    // endpoint has no hue, so its delta is defined as zero.
    let dl = lab2.l - lab1.l;
    let dc = cp2 - cp1;
    let dhp = if cp1 * cp2 == 0.0 {
        0.0
    } else {
        let d = hp2 - hp1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dh = 2.0 * (cp1 * cp2).sqrt() * (0.5 * dhp).to_radians().sin();

    // Step 3: averages. The hue mean takes the short arc; when the gap
    // exceeds 180° the smaller angle is lifted by 360° first.
    let l_bar = 0.5 * (lab1.l + lab2.l);
    let cp_bar = 0.5 * (cp1 + cp2);
    let hp_bar = if cp1 * cp2 == 0.0 {
        hp1 + hp2
    } else {
        let sum = hp1 + hp2;
        if (hp1 - hp2).abs() <= 180.0 {
            0.5 * sum
        } else if sum < 360.0 {
            0.5 * (sum + 360.0)
        } else {
            0.5 * (sum - 360.0)
        }
    };

    let t = 1.0 - 0.17 * (hp_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_bar).to_radians().cos()
        + 0.32 * (3.0 * hp_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_bar - 63.0).to_radians().cos();

    // Rotation term: Gaussian hue weight centered on the blue region.
    let d_theta = 30.0 * (-((hp_bar - 275.0) / 25.0).powi(2)).exp();
    let cp_bar7 = cp_bar.powi(7);
    let rc = 2.0 * (cp_bar7 / (cp_bar7 + POW25_7)).sqrt();
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    // Weighting functions.
    let l50 = (l_bar - 50.0) * (l_bar - 50.0);
    let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + 0.045 * cp_bar;
    let sh = 1.0 + 0.015 * cp_bar * t;

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh / sh;
    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let lab = Lab::new(48.9, 73.6, 42.6);
        assert_abs_diff_eq!(delta_e2000(lab, lab), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        // CIEDE2000 is symmetric despite CIE94 not being.
        let pairs = [
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485)),
            (Lab::new(22.7233, 20.0904, -46.694), Lab::new(23.0331, 14.973, -42.5619)),
            (Lab::new(90.8027, -2.0831, 1.441), Lab::new(91.1528, -1.6435, 0.0447)),
        ];
        for (a, b) in pairs {
            assert_abs_diff_eq!(delta_e2000(a, b), delta_e2000(b, a), epsilon = 1e-12);
        }
    }

    /// Sharma et al. (2005) supplementary test data, pairs chosen to
    /// cover the formula's branches: neutral-axis G correction, the
    /// hue-average wraparound discontinuity, the rotation term, and
    /// near-black noise floors.
    #[test]
    fn test_sharma_reference_pairs() {
        #[rustfmt::skip]
        let cases: &[(Lab, Lab, f64)] = &[
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485), 2.0425),
            (Lab::new(50.0, 3.1571, -77.2803), Lab::new(50.0, 0.0, -82.7485), 2.8615),
            (Lab::new(50.0, 2.8361, -74.02), Lab::new(50.0, 0.0, -82.7485), 3.4412),
            (Lab::new(50.0, -1.3802, -84.2814), Lab::new(50.0, 0.0, -82.7485), 1.0),
            (Lab::new(50.0, -1.1848, -84.8006), Lab::new(50.0, 0.0, -82.7485), 1.0),
            (Lab::new(50.0, 2.49, -0.001), Lab::new(50.0, -2.49, 0.0009), 7.1792),
            (Lab::new(50.0, 2.49, -0.001), Lab::new(50.0, -2.49, 0.0012), 7.2195),
            (Lab::new(60.2574, -34.0099, 36.2677), Lab::new(60.4626, -34.1751, 39.4387), 1.2644),
            (Lab::new(61.2901, 3.7196, -5.3901), Lab::new(61.4292, 2.248, -4.962), 1.8731),
            (Lab::new(90.8027, -2.0831, 1.441), Lab::new(91.1528, -1.6435, 0.0447), 1.4441),
            (Lab::new(2.0776, 0.0795, -1.135), Lab::new(0.9033, -0.0636, -0.5514), 0.9082),
        ];
        for (lab1, lab2, expected) in cases {
            assert_abs_diff_eq!(delta_e2000(*lab1, *lab2), *expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_neutral_axis_pair() {
        // Both colors on the neutral axis: only the lightness term fires.
        let de = delta_e2000(Lab::new(40.0, 0.0, 0.0), Lab::new(45.0, 0.0, 0.0));
        assert!(de > 0.0 && de < 5.0);
    }
}
