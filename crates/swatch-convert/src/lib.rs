//! # swatch-convert
//!
//! Color space conversions between the value types of `swatch-core`.
//!
//! All conversions route through the same spine:
//!
//! ```text
//! hex <-> Rgb <-> linear RGB <-> XYZ (D50) <-> Lab
//!           \
//!            -> Cmyk (derived, one-way)
//! ```
//!
//! - [`srgb`] - the sRGB transfer function pair (gamma decode/encode)
//! - [`xyz`] - Bradford-adapted sRGB/XYZ matrices with a D50 white point
//! - [`rgb_to_lab`] / [`lab_to_rgb`] - the full spine in both directions
//! - [`rgb_to_cmyk`] - subtractive process-ink derivation
//! - [`hex_to_rgb`] / [`rgb_to_hex`] / [`hex_to_lab`] / [`lab_to_hex`] -
//!   hex compositions
//! - [`color_info`] - the display bundle the UI renders from one literal
//!
//! # Totality
//!
//! Every function here returns a deterministic, finite result for any
//! syntactically valid input. Malformed hex degrades to the black sentinel;
//! out-of-gamut Lab clamps into [0, 255] on the RGB side instead of
//! propagating negatives or NaN. Because of that clamp, Lab -> RGB -> Lab
//! is only an approximate inverse for colors outside the sRGB gamut;
//! that precision loss is expected.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Rgb;
//! use swatch_convert::{rgb_to_cmyk, rgb_to_lab};
//!
//! let red = Rgb::new(255, 0, 0);
//! assert_eq!(rgb_to_cmyk(red).to_string(), "0/100/100/0");
//! assert!((rgb_to_lab(red).l - 54.29).abs() < 0.05);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cmyk;
mod hex;
mod info;
mod lab;
pub mod srgb;
pub mod xyz;

pub use cmyk::rgb_to_cmyk;
pub use hex::{hex_to_lab, hex_to_rgb, lab_to_hex, rgb_to_hex};
pub use info::{ColorInfo, color_info};
pub use lab::{lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
