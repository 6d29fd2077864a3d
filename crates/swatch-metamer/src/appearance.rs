//! Per-illuminant appearance simulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use swatch_core::{HexColor, Lab, Rgb};
use swatch_convert::{lab_to_rgb, rgb_to_hex, srgb};

use crate::light::LightSource;

/// Minimum WCAG contrast ratio for comfortable reading of body text.
const LEGIBILITY_CONTRAST: f64 = 4.5;

/// CRI below which a source visibly muddies saturated colors.
const CRI_RENDERING_FLOOR: f64 = 85.0;

/// Qualitative risk attached to viewing a color under a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceWarning {
    /// UV share above 0.1: pigment fading risk on long exposure.
    UvFading,
    /// Flicker below 100 Hz: visible strobing skews perception.
    Flicker,
}

impl fmt::Display for AppearanceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UvFading => f.write_str("UV content risks pigment fading"),
            Self::Flicker => f.write_str("low-frequency flicker affects perception"),
        }
    }
}

/// The simulated perceived color of one base Lab value under one source.
///
/// A pure function of `(Lab, LightSource)`; see [`simulate_appearance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAppearance {
    /// Name of the light source this appearance was simulated under.
    pub light_source: String,
    /// Shifted Lab value.
    pub perceived: Lab,
    /// Shifted value rendered to display hex (gamut-clamped).
    pub perceived_hex: HexColor,
    /// WCAG contrast ratio of the perceived color against white.
    pub contrast_vs_white: f64,
    /// WCAG contrast ratio of the perceived color against black.
    pub contrast_vs_black: f64,
    /// Whether the perceived color stays legible on a white backing.
    pub legible_on_white: bool,
    /// Qualitative risks for this viewing condition.
    pub warnings: Vec<AppearanceWarning>,
}

/// WCAG relative luminance of an 8-bit color.
fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_normalized();
    0.2126 * srgb::eotf(r) + 0.7152 * srgb::eotf(g) + 0.0722 * srgb::eotf(b)
}

/// Approximates how a base Lab color reads under a light source.
///
/// Heuristic model, documented in the crate root:
///
/// - tint: a\*/b\* shift against the warmth term
///   `t = (CCT - 5000) / 2000` - warm sources push red/yellow, cool
///   sources push blue;
/// - rendering: below CRI 85 the a\*/b\* axes scale by `CRI / 85`,
///   a desaturation proxy for poor color rendering;
/// - lightness is left untouched;
/// - UV and flicker thresholds attach [`AppearanceWarning`]s without
///   changing the color.
///
/// # Example
///
/// ```rust
/// use swatch_core::Lab;
/// use swatch_metamer::{LightSource, simulate_appearance};
///
/// let base = Lab::new(49.2, 72.4, 46.0);
/// let booth = simulate_appearance(base, &LightSource::d50_booth());
/// assert_eq!(booth.perceived, base); // reference condition: no shift
///
/// let warm = simulate_appearance(base, &LightSource::incandescent());
/// assert!(warm.perceived.b > base.b); // yellow cast
/// ```
pub fn simulate_appearance(lab: Lab, light: &LightSource) -> ColorAppearance {
    let t = (light.color_temperature - 5000.0) / 2000.0;
    let mut a = lab.a - 2.0 * t;
    let mut b = lab.b - 6.0 * t;

    if light.color_rendering_index < CRI_RENDERING_FLOOR {
        let scale = (light.color_rendering_index / CRI_RENDERING_FLOOR).max(0.0);
        a *= scale;
        b *= scale;
    }

    let perceived = Lab::new(lab.l, a, b);
    let rgb = lab_to_rgb(perceived);
    let luminance = relative_luminance(rgb);
    let contrast_vs_white = 1.05 / (luminance + 0.05);
    let contrast_vs_black = (luminance + 0.05) / 0.05;

    let mut warnings = Vec::new();
    if light.uv_content > 0.1 {
        warnings.push(AppearanceWarning::UvFading);
    }
    if light.flicker_frequency > 0.0 && light.flicker_frequency < 100.0 {
        warnings.push(AppearanceWarning::Flicker);
    }

    ColorAppearance {
        light_source: light.name.clone(),
        perceived,
        perceived_hex: rgb_to_hex(rgb),
        contrast_vs_white,
        contrast_vs_black,
        legible_on_white: contrast_vs_white >= LEGIBILITY_CONTRAST,
        warnings,
    }
}
