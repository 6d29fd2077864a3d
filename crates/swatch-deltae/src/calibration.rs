//! Spectrophotometer calibration.
//!
//! Software ΔE and a bench instrument's readout never agree exactly -
//! aperture size, backing, and filter choices all skew the numbers. The
//! shop-floor fix is a linear correction fitted empirically against known
//! sample pairs: `adjusted = raw * factor + offset`. The factor comes from
//! the instrument vendor's characterization or from [`fit_calibration`];
//! it is never derived analytically.

use serde::{Deserialize, Serialize};
use swatch_core::Lab;

use crate::{DeltaEAlgorithm, delta_e, delta_e2000};

/// Linear correction aligning computed ΔE with one physical instrument.
///
/// # Example
///
/// ```rust
/// use swatch_deltae::SpectrophotometerCalibration;
///
/// let cal = SpectrophotometerCalibration::identity()
///     .with_factor(1.02)
///     .with_offset(-0.05);
/// assert!(!cal.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrophotometerCalibration {
    /// Formula the raw difference is computed with.
    pub algorithm: DeltaEAlgorithm,
    /// Multiplicative correction.
    pub factor: f64,
    /// Additive correction, applied after the factor.
    pub offset: f64,
}

impl Default for SpectrophotometerCalibration {
    fn default() -> Self {
        Self::identity()
    }
}

impl SpectrophotometerCalibration {
    /// The identity calibration: CIEDE2000, factor 1, offset 0.
    pub fn identity() -> Self {
        Self {
            algorithm: DeltaEAlgorithm::Ciede2000,
            factor: 1.0,
            offset: 0.0,
        }
    }

    /// Sets the ΔE formula.
    pub fn with_algorithm(mut self, algorithm: DeltaEAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the multiplicative factor.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Sets the additive offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Check if this calibration is a no-op over its algorithm.
    #[inline]
    pub fn is_identity(&self) -> bool {
        (self.factor - 1.0).abs() < 1e-9 && self.offset.abs() < 1e-9
    }
}

/// Looks up a named instrument-family preset.
///
/// Presets carry vendor-characterized corrections for the instrument
/// families the shop runs against; `"reference"` is the identity. Returns
/// `None` for unknown names.
///
/// # Example
///
/// ```rust
/// use swatch_deltae::calibration_preset;
///
/// let xrite = calibration_preset("xrite").unwrap();
/// assert!(xrite.factor != 0.0);
/// assert!(calibration_preset("colorimeter-9000").is_none());
/// ```
pub fn calibration_preset(name: &str) -> Option<SpectrophotometerCalibration> {
    let preset = match name {
        "reference" => SpectrophotometerCalibration::identity(),
        "xrite" => SpectrophotometerCalibration::identity()
            .with_factor(0.98)
            .with_offset(0.10),
        "konica_minolta" => SpectrophotometerCalibration::identity()
            .with_factor(1.02)
            .with_offset(-0.05),
        "datacolor" => SpectrophotometerCalibration::identity()
            .with_factor(0.95)
            .with_offset(0.20),
        _ => return None,
    };
    Some(preset)
}

/// ΔE adjusted to match a calibrated instrument's readout.
///
/// `raw ΔE(algorithm) * factor + offset`, nothing more.
pub fn delta_e_calibrated(lab1: Lab, lab2: Lab, cal: &SpectrophotometerCalibration) -> f64 {
    delta_e(lab1, lab2, cal.algorithm) * cal.factor + cal.offset
}

/// Fits a calibration factor from a single known sample pair.
///
/// One-point fit: the factor is `expected / raw` with the offset pinned at
/// zero, so a single instrument reading of a known pair anchors the
/// correction. This is NOT a regression - it cannot model an additive
/// bias, and a pair with raw ΔE of zero carries no information (the fit
/// degrades to the identity factor). Fit against several pairs externally
/// when more fidelity is needed.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
/// use swatch_deltae::{delta_e_calibrated, fit_calibration};
///
/// let a = Lab::new(50.0, 10.0, 10.0);
/// let b = Lab::new(55.0, 12.0, 8.0);
/// let cal = fit_calibration(a, b, 6.0);
/// assert!((delta_e_calibrated(a, b, &cal) - 6.0).abs() < 1e-9);
/// ```
pub fn fit_calibration(lab1: Lab, lab2: Lab, expected: f64) -> SpectrophotometerCalibration {
    let raw = delta_e2000(lab1, lab2);
    let factor = if raw == 0.0 { 1.0 } else { expected / raw };
    SpectrophotometerCalibration::identity().with_factor(factor)
}
