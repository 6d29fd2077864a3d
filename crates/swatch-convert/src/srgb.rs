//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise curve: a linear segment near black
//! joined to a power law (roughly gamma 2.2) for the rest of the range.
//!
//! # Range
//!
//! - Input/Output: [0, 1] for in-gamut values; out-of-range input follows
//!   the same branches without clamping
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: decodes a gamma-encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_convert::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.2140).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light to the gamma-encoded form.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_convert::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 1e-3);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=255 {
            let v = i as f64 / 255.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-12, "v={v}, back={back}");
        }
    }

    #[test]
    fn test_linear_segment() {
        assert!((eotf(0.02) - 0.02 / 12.92).abs() < 1e-15);
        assert!((oetf(0.002) - 0.002 * 12.92).abs() < 1e-15);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-12);
    }
}
