//! # swatch-metamer
//!
//! Metamerism simulation: how a printed color appears to shift under
//! different light sources, and whether a pair of viewing conditions
//! pushes the shift past acceptance.
//!
//! # Model boundary
//!
//! This is a **parametric heuristic**, not a spectral-power-distribution
//! simulation. The appearance shift is driven by three scalar knobs of
//! the illuminant descriptor - color temperature (tint), CRI
//! (desaturation), and the UV/flicker fields (qualitative warnings).
//! It produces plausible press-room guidance, not colorimetric ground
//! truth; anything contract-critical belongs on a spectrophotometer
//! under a real booth.
//!
//! # Pipeline
//!
//! One-shot compute-and-return, no retained state:
//!
//! ```text
//! Lab + LightSource  -> ColorAppearance        (per illuminant)
//! Lab + MetamerismTest -> MetamerismReport     (all pairwise ΔE2000)
//! ```
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Lab;
//! use swatch_metamer::{MetamerismTest, metamerism_report};
//!
//! let brand_red = Lab::new(49.2, 72.4, 46.0);
//! let test = MetamerismTest::standard(2.0);
//! let report = metamerism_report(brand_red, &test);
//! assert_eq!(report.comparisons.len(), 15); // 6 sources -> 15 pairs
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod appearance;
mod light;
mod report;

pub use appearance::{AppearanceWarning, ColorAppearance, simulate_appearance};
pub use light::{LightSource, standard_sources};
pub use report::{
    Acceptance, DifferenceClass, MetamerismReport, MetamerismTest, PairComparison, Severity,
    metamerism_report,
};
