//! CIE 1994 color difference.

use swatch_core::Lab;

/// ΔE\*₉₄ with graphic-arts weights (kL = kC = kH = 1).
///
/// Weighted Euclidean distance where the chroma and hue scale factors
/// derive from the **first** argument's chroma:
///
/// ```text
/// SL = 1
/// SC = 1 + 0.045 * C1
/// SH = 1 + 0.015 * C1
/// ```
///
/// Because C1 privileges the first color as the reference, the formula is
/// asymmetric: `delta_e94(a, b) != delta_e94(b, a)` whenever the chromas
/// differ. That is the standard CIE94 definition. Pass the reference
/// (target) color first and the sample second; do not symmetrize.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
/// use swatch_deltae::delta_e94;
///
/// let reference = Lab::new(50.0, 50.0, 0.0);
/// let sample = Lab::new(50.0, 40.0, 0.0);
/// assert_ne!(delta_e94(reference, sample), delta_e94(sample, reference));
/// ```
pub fn delta_e94(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let dc = c1 - c2;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    // Hue difference recovered from the Euclidean remainder; floating
    // error can push it a hair negative for near-identical chroma.
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + 0.045 * c1;
    let sh = 1.0 + 0.015 * c1;

    let lc = dc / sc;
    (dl * dl + lc * lc + dh2 / (sh * sh)).sqrt()
}
