//! # swatch-pantone
//!
//! Reference color matching against a bundled Pantone table.
//!
//! The table is a read-only list of `{name, code, Lab, hex}` entries
//! shipped as YAML inside the crate. Matching is a linear scan - the
//! table is a few hundred entries and lookups happen at interactive
//! frequency, so there is nothing to index.
//!
//! # Injected, not global
//!
//! Matching functions are methods on an explicitly constructed
//! [`PantoneLibrary`] value rather than free functions over a module
//! global. [`PantoneLibrary::builtin`] hands out the shared bundled
//! table; tests inject fixture tables through
//! [`PantoneLibrary::from_entries`] or [`PantoneLibrary::from_yaml`].
//!
//! # Example
//!
//! ```rust
//! use swatch_pantone::PantoneLibrary;
//!
//! let library = PantoneLibrary::builtin();
//! let entry = library.find_by_hex("#E4002B").unwrap();
//! assert_eq!(entry.code, "185 C");
//!
//! let closest = library.closest_by_lab(entry.lab).unwrap();
//! assert_eq!(closest.entry.code, "185 C");
//! assert_eq!(closest.delta_e, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod entry;
mod error;
mod library;

pub use entry::PantoneEntry;
pub use error::{LibraryError, LibraryResult};
pub use library::{PantoneLibrary, PantoneMatch};
