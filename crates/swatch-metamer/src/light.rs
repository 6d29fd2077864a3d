//! Illuminant descriptors.
//!
//! A [`LightSource`] is purely descriptive: a handful of scalar
//! characteristics of a lamp, never mutated by the simulation. The
//! presets cover the viewing conditions a print job typically travels
//! through between proofing booth and storefront.

use serde::{Deserialize, Serialize};

/// Descriptive characteristics of one light source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    /// Display name.
    pub name: String,
    /// Correlated color temperature, Kelvin.
    pub color_temperature: f64,
    /// Color rendering index, [0, 100].
    pub color_rendering_index: f64,
    /// UV share of output, [0, 1].
    pub uv_content: f64,
    /// IR share of output, [0, 1].
    pub ir_content: f64,
    /// Flicker frequency in Hz; 0 means steady output.
    pub flicker_frequency: f64,
}

impl LightSource {
    /// Creates a light source with neutral defaults (CRI 100, no UV/IR,
    /// steady output); adjust fields directly for anything exotic.
    pub fn new(name: impl Into<String>, color_temperature: f64) -> Self {
        Self {
            name: name.into(),
            color_temperature,
            color_rendering_index: 100.0,
            uv_content: 0.0,
            ir_content: 0.0,
            flicker_frequency: 0.0,
        }
    }

    /// D50 proofing booth: the reference viewing condition.
    pub fn d50_booth() -> Self {
        Self {
            name: "D50 viewing booth".into(),
            color_temperature: 5000.0,
            color_rendering_index: 98.0,
            uv_content: 0.02,
            ir_content: 0.05,
            flicker_frequency: 0.0,
        }
    }

    /// Household incandescent, deep warm cast.
    pub fn incandescent() -> Self {
        Self {
            name: "Incandescent 2700K".into(),
            color_temperature: 2700.0,
            color_rendering_index: 100.0,
            uv_content: 0.0,
            ir_content: 0.75,
            flicker_frequency: 120.0,
        }
    }

    /// Halogen display spot.
    pub fn halogen() -> Self {
        Self {
            name: "Halogen 3000K".into(),
            color_temperature: 3000.0,
            color_rendering_index: 100.0,
            uv_content: 0.05,
            ir_content: 0.65,
            flicker_frequency: 120.0,
        }
    }

    /// Cool-white tube fluorescent on a magnetic ballast: poor rendering
    /// and perceivable mains flicker.
    pub fn fluorescent_cool_white() -> Self {
        Self {
            name: "Cool white fluorescent".into(),
            color_temperature: 4150.0,
            color_rendering_index: 62.0,
            uv_content: 0.08,
            ir_content: 0.05,
            flicker_frequency: 60.0,
        }
    }

    /// Neutral retail LED track lighting.
    pub fn retail_led() -> Self {
        Self {
            name: "Retail LED 4000K".into(),
            color_temperature: 4000.0,
            color_rendering_index: 80.0,
            uv_content: 0.0,
            ir_content: 0.0,
            flicker_frequency: 0.0,
        }
    }

    /// Overcast daylight, D65.
    pub fn daylight_d65() -> Self {
        Self {
            name: "Daylight D65".into(),
            color_temperature: 6504.0,
            color_rendering_index: 100.0,
            uv_content: 0.15,
            ir_content: 0.10,
            flicker_frequency: 0.0,
        }
    }
}

/// The standard six-source booth set the shop tests against.
pub fn standard_sources() -> Vec<LightSource> {
    vec![
        LightSource::d50_booth(),
        LightSource::incandescent(),
        LightSource::halogen(),
        LightSource::fluorescent_cool_white(),
        LightSource::retail_led(),
        LightSource::daylight_d65(),
    ]
}
