//! # swatch-deltae
//!
//! Perceptual color difference metrics over CIE Lab.
//!
//! Implements the three generations of the CIE ΔE formula plus the
//! instrument-calibration layer used to reconcile computed differences
//! against spectrophotometer readings:
//!
//! - [`delta_e76`] - Euclidean distance in Lab (a true metric)
//! - [`delta_e94`] - chroma-weighted, asymmetric by definition
//! - [`delta_e2000`] - full CIEDE2000, validated against the published
//!   Sharma reference pairs
//! - [`delta_e`] - dispatch by [`DeltaEAlgorithm`]
//! - [`color_distance`] - hex convenience with the untrusted-sentinel
//!   contract
//! - [`SpectrophotometerCalibration`] - multiplicative/additive correction
//!   presets per instrument family
//!
//! # Interpreting ΔE
//!
//! | ΔE2000 | Perception |
//! |--------|------------|
//! | < 1 | imperceptible to a trained eye |
//! | 1 - 2 | perceptible on close inspection |
//! | 2 - 4 | perceptible at a glance |
//! | > 4 | clearly different colors |
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Lab;
//! use swatch_deltae::{DeltaEAlgorithm, delta_e};
//!
//! let target = Lab::new(48.9, 73.6, 42.6);
//! let proof = Lab::new(49.2, 72.9, 43.1);
//! let de = delta_e(target, proof, DeltaEAlgorithm::default());
//! assert!(de < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod calibration;
mod cie76;
mod cie94;
mod ciede2000;
mod distance;

pub use calibration::{
    SpectrophotometerCalibration, calibration_preset, delta_e_calibrated, fit_calibration,
};
pub use cie76::delta_e76;
pub use cie94::delta_e94;
pub use ciede2000::delta_e2000;
pub use distance::{ColorDistance, color_distance};

use serde::{Deserialize, Serialize};
use swatch_core::Lab;

/// Color difference formula selector.
///
/// Exactly three cases; dispatch is a closed `match` with no string
/// fallback. The default is CIEDE2000, the formula print QC tooling
/// standardizes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaEAlgorithm {
    /// CIE 1976: Euclidean distance in Lab.
    Cie76,
    /// CIE 1994: chroma-weighted, reference-color asymmetric.
    Cie94,
    /// CIEDE2000: the current industry standard.
    #[default]
    Ciede2000,
}

impl DeltaEAlgorithm {
    /// Stable lowercase name, matching the serde wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cie76 => "cie76",
            Self::Cie94 => "cie94",
            Self::Ciede2000 => "ciede2000",
        }
    }
}

/// Computes ΔE between two Lab colors with the selected formula.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
/// use swatch_deltae::{DeltaEAlgorithm, delta_e};
///
/// let a = Lab::new(50.0, 10.0, -10.0);
/// let b = Lab::new(52.0, 8.0, -12.0);
/// let de76 = delta_e(a, b, DeltaEAlgorithm::Cie76);
/// let de00 = delta_e(a, b, DeltaEAlgorithm::Ciede2000);
/// assert!(de76 > de00);
/// ```
pub fn delta_e(lab1: Lab, lab2: Lab, algorithm: DeltaEAlgorithm) -> f64 {
    match algorithm {
        DeltaEAlgorithm::Cie76 => delta_e76(lab1, lab2),
        DeltaEAlgorithm::Cie94 => delta_e94(lab1, lab2),
        DeltaEAlgorithm::Ciede2000 => delta_e2000(lab1, lab2),
    }
}
