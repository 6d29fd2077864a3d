//! Pairwise metamerism reporting.
//!
//! A report answers the press-check question: "we matched this color in
//! the booth - will it still match everywhere the piece ends up?" Every
//! light source in the test produces one simulated appearance, every
//! appearance pair produces one ΔE2000 comparison, and the fixed decision
//! tables below turn the numbers into labels. The thresholds are part of
//! the product contract; do not retune them.

use serde::{Deserialize, Serialize};
use swatch_core::Lab;
use swatch_deltae::delta_e2000;

use crate::appearance::{ColorAppearance, simulate_appearance};
use crate::light::{LightSource, standard_sources};

/// A metamerism test setup: which sources to simulate and the ΔE the
/// customer signed off on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetamerismTest {
    /// Light sources to simulate, in display order.
    pub light_sources: Vec<LightSource>,
    /// Maximum acceptable ΔE2000 between any two viewing conditions.
    pub acceptance_threshold: f64,
}

impl MetamerismTest {
    /// The standard six-source set with the given threshold.
    pub fn standard(acceptance_threshold: f64) -> Self {
        Self {
            light_sources: standard_sources(),
            acceptance_threshold,
        }
    }
}

/// Visual magnitude of one pairwise difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceClass {
    /// ΔE < 1.
    Imperceptible,
    /// ΔE < 2.
    Slight,
    /// ΔE < 4.
    Noticeable,
    /// ΔE ≥ 4.
    Significant,
}

impl DifferenceClass {
    /// Classifies a ΔE2000 value.
    pub fn classify(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            Self::Imperceptible
        } else if delta_e < 2.0 {
            Self::Slight
        } else if delta_e < 4.0 {
            Self::Noticeable
        } else {
            Self::Significant
        }
    }
}

/// Acceptance status of one pair against the test threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acceptance {
    /// ΔE ≤ threshold (inclusive).
    Pass,
    /// ΔE ≤ 1.5 × threshold.
    Marginal,
    /// Everything beyond.
    Fail,
}

impl Acceptance {
    /// Classifies a ΔE2000 value against a threshold.
    ///
    /// The boundary is inclusive on both rungs: exactly the threshold
    /// passes, exactly 1.5x is marginal.
    pub fn classify(delta_e: f64, threshold: f64) -> Self {
        if delta_e <= threshold {
            Self::Pass
        } else if delta_e <= 1.5 * threshold {
            Self::Marginal
        } else {
            Self::Fail
        }
    }
}

/// Overall verdict for a whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every pair passed.
    Acceptable,
    /// No failures and at most one marginal pair.
    Noticeable,
    /// At most two failing pairs.
    Problematic,
    /// Three or more failing pairs.
    Critical,
}

/// One pairwise comparison between two viewing conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    /// First light source name.
    pub source_a: String,
    /// Second light source name.
    pub source_b: String,
    /// ΔE2000 between the two perceived colors.
    pub delta_e: f64,
    /// Visual magnitude label.
    pub difference: DifferenceClass,
    /// Status against the acceptance threshold.
    pub acceptance: Acceptance,
}

/// The full metamerism report for one base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetamerismReport {
    /// The color under test.
    pub base: Lab,
    /// Threshold the comparisons were judged against.
    pub acceptance_threshold: f64,
    /// One appearance per light source, in test order.
    pub appearances: Vec<ColorAppearance>,
    /// All n(n-1)/2 pairwise comparisons.
    pub comparisons: Vec<PairComparison>,
    /// Worst pairwise ΔE2000 (0 when fewer than two sources).
    pub max_delta_e: f64,
    /// Overall verdict.
    pub severity: Severity,
}

/// Runs the full metamerism pipeline for one base color.
///
/// Simulates an appearance per source, compares every pair of perceived
/// colors with ΔE2000, and derives the overall severity from the fail and
/// marginal counts. With fewer than two sources there are no pairs and
/// the verdict is vacuously [`Severity::Acceptable`].
pub fn metamerism_report(base: Lab, test: &MetamerismTest) -> MetamerismReport {
    let appearances: Vec<ColorAppearance> = test
        .light_sources
        .iter()
        .map(|light| simulate_appearance(base, light))
        .collect();

    let n = appearances.len();
    let mut comparisons = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    let mut max_delta_e = 0.0_f64;
    for i in 0..n {
        for j in (i + 1)..n {
            let de = delta_e2000(appearances[i].perceived, appearances[j].perceived);
            max_delta_e = max_delta_e.max(de);
            comparisons.push(PairComparison {
                source_a: appearances[i].light_source.clone(),
                source_b: appearances[j].light_source.clone(),
                delta_e: de,
                difference: DifferenceClass::classify(de),
                acceptance: Acceptance::classify(de, test.acceptance_threshold),
            });
        }
    }

    let fails = comparisons
        .iter()
        .filter(|c| c.acceptance == Acceptance::Fail)
        .count();
    let marginals = comparisons
        .iter()
        .filter(|c| c.acceptance == Acceptance::Marginal)
        .count();
    let severity = if fails == 0 && marginals == 0 {
        Severity::Acceptable
    } else if fails == 0 && marginals <= 1 {
        Severity::Noticeable
    } else if fails <= 2 {
        Severity::Problematic
    } else {
        Severity::Critical
    };

    MetamerismReport {
        base,
        acceptance_threshold: test.acceptance_threshold,
        appearances,
        comparisons,
        max_delta_e,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_class_boundaries() {
        assert_eq!(DifferenceClass::classify(0.99), DifferenceClass::Imperceptible);
        assert_eq!(DifferenceClass::classify(1.0), DifferenceClass::Slight);
        assert_eq!(DifferenceClass::classify(1.99), DifferenceClass::Slight);
        assert_eq!(DifferenceClass::classify(2.0), DifferenceClass::Noticeable);
        assert_eq!(DifferenceClass::classify(3.99), DifferenceClass::Noticeable);
        assert_eq!(DifferenceClass::classify(4.0), DifferenceClass::Significant);
    }

    #[test]
    fn test_acceptance_boundary_is_inclusive() {
        // Exactly at the threshold passes; this is <=, not <.
        assert_eq!(Acceptance::classify(2.0, 2.0), Acceptance::Pass);
        assert_eq!(Acceptance::classify(2.0 + 1e-9, 2.0), Acceptance::Marginal);
        assert_eq!(Acceptance::classify(3.0, 2.0), Acceptance::Marginal);
        assert_eq!(Acceptance::classify(3.0 + 1e-9, 2.0), Acceptance::Fail);
    }

    #[test]
    fn test_pair_count() {
        let report = metamerism_report(Lab::new(50.0, 20.0, 20.0), &MetamerismTest::standard(2.0));
        assert_eq!(report.appearances.len(), 6);
        assert_eq!(report.comparisons.len(), 15);
    }

    #[test]
    fn test_identical_sources_are_acceptable() {
        let test = MetamerismTest {
            light_sources: vec![LightSource::d50_booth(), LightSource::d50_booth()],
            acceptance_threshold: 0.5,
        };
        let report = metamerism_report(Lab::new(50.0, 40.0, 0.0), &test);
        assert_eq!(report.max_delta_e, 0.0);
        assert_eq!(report.severity, Severity::Acceptable);
        assert!(report.comparisons.iter().all(|c| c.acceptance == Acceptance::Pass));
    }

    #[test]
    fn test_hopeless_threshold_is_critical() {
        // Saturated color, wildly different CCTs, threshold near zero:
        // every pair involving a warm source fails.
        let test = MetamerismTest {
            light_sources: vec![
                LightSource::incandescent(),
                LightSource::d50_booth(),
                LightSource::daylight_d65(),
            ],
            acceptance_threshold: 0.001,
        };
        let report = metamerism_report(Lab::new(50.0, 40.0, 20.0), &test);
        assert_eq!(report.comparisons.len(), 3);
        assert_eq!(report.severity, Severity::Critical);
        assert!(report.max_delta_e > 1.0);
    }

    #[test]
    fn test_generous_threshold_is_acceptable() {
        let report =
            metamerism_report(Lab::new(50.0, 20.0, 20.0), &MetamerismTest::standard(100.0));
        assert_eq!(report.severity, Severity::Acceptable);
    }

    #[test]
    fn test_single_source_has_no_pairs() {
        let test = MetamerismTest {
            light_sources: vec![LightSource::d50_booth()],
            acceptance_threshold: 1.0,
        };
        let report = metamerism_report(Lab::new(50.0, 0.0, 0.0), &test);
        assert!(report.comparisons.is_empty());
        assert_eq!(report.max_delta_e, 0.0);
        assert_eq!(report.severity, Severity::Acceptable);
    }

    #[test]
    fn test_neutral_base_still_shifts() {
        // Metamerism bites neutrals too: tint shifts move a*/b* off zero
        // by different amounts per source.
        let report = metamerism_report(Lab::new(60.0, 0.0, 0.0), &MetamerismTest::standard(2.0));
        assert!(report.max_delta_e > 0.0);
    }
}
