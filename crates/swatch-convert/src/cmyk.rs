//! CMYK derivation.

use swatch_core::{Cmyk, Rgb};

/// Derives process-ink percentages from 8-bit RGB.
///
/// Standard subtractive conversion: K takes as much as the brightest
/// channel allows, the remaining inks cover the rest. Pure black
/// short-circuits to `0/0/0/100` so the under-color division never sees
/// zero.
///
/// # Example
///
/// ```rust
/// use swatch_core::Rgb;
/// use swatch_convert::rgb_to_cmyk;
///
/// assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 0)).to_string(), "0/0/0/100");
/// assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)).to_string(), "0/100/100/0");
/// ```
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.to_normalized();
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk::new(0, 0, 0, 100);
    }
    let c = (1.0 - r - k) / (1.0 - k) * 100.0;
    let m = (1.0 - g - k) / (1.0 - k) * 100.0;
    let y = (1.0 - b - k) / (1.0 - k) * 100.0;
    Cmyk::new(
        c.round() as u8,
        m.round() as u8,
        y.round() as u8,
        (k * 100.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_black_short_circuits() {
        assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 0)), Cmyk::new(0, 0, 0, 100));
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk::new(0, 100, 100, 0));
        assert_eq!(rgb_to_cmyk(Rgb::new(0, 255, 0)), Cmyk::new(100, 0, 100, 0));
        assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 255)), Cmyk::new(100, 100, 0, 0));
    }

    #[test]
    fn test_white_is_no_ink() {
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 255, 255)), Cmyk::new(0, 0, 0, 0));
    }

    #[test]
    fn test_mid_gray() {
        // Gray carries only key ink.
        assert_eq!(rgb_to_cmyk(Rgb::new(128, 128, 128)), Cmyk::new(0, 0, 0, 50));
    }
}
