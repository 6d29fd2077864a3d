//! # swatch-core
//!
//! Core value types for print-shop color management.
//!
//! This crate sits at the bottom of the workspace dependency graph and
//! defines the plain color values every other crate operates on:
//!
//! - [`HexColor`] - normalized `#rrggbb` display string with a lossy
//!   fallback to the black sentinel
//! - [`Rgb`] - 8-bit device RGB
//! - [`Cmyk`] - derived process-ink percentages
//! - [`Lab`] - CIE L\*a\*b\* coordinates
//!
//! # Design
//!
//! All types are immutable values: cheap to copy, safe to share across
//! threads, with no interior state. Construction is total - malformed hex
//! input degrades to a documented sentinel instead of failing, while the
//! strict [`HexColor::parse`] / [`TryFrom`] entry points exist for callers
//! that need to distinguish "invalid" from "black".
//!
//! # Example
//!
//! ```rust
//! use swatch_core::{HexColor, Rgb};
//!
//! let hex = HexColor::parse("#E4002B").unwrap();
//! assert_eq!(hex.as_str(), "#e4002b");
//!
//! let rgb = Rgb::new(228, 0, 43);
//! assert_eq!(rgb.r, 228);
//! ```
//!
//! # Used By
//!
//! - `swatch-convert` - color space conversions
//! - `swatch-deltae` - color difference metrics
//! - `swatch-pantone` - reference table matching
//! - `swatch-metamer` - appearance simulation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cmyk;
mod error;
mod hex;
mod lab;
mod rgb;

pub use cmyk::Cmyk;
pub use error::{CoreError, CoreResult};
pub use hex::{HexColor, is_valid_hex};
pub use lab::Lab;
pub use rgb::Rgb;
