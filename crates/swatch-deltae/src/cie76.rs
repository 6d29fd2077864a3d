//! CIE 1976 color difference.

use swatch_core::Lab;

/// ΔE\*₇₆: Euclidean distance in Lab space.
///
/// The only ΔE formula that is a true metric: symmetric, zero iff the
/// inputs are componentwise equal, and it satisfies the triangle
/// inequality. Overstates differences in saturated regions, which is why
/// the later formulas exist.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
/// use swatch_deltae::delta_e76;
///
/// let de = delta_e76(Lab::new(50.0, 0.0, 0.0), Lab::new(51.0, 2.0, 2.0));
/// assert!((de - 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn delta_e76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}
