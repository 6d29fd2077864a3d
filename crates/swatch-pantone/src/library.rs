//! The reference table and its matching scans.

use std::sync::OnceLock;

use serde::Serialize;
use swatch_core::{HexColor, Lab};
use swatch_deltae::{DeltaEAlgorithm, delta_e};

use crate::entry::PantoneEntry;
use crate::error::LibraryResult;

/// The bundled solid-coated reference subset.
const BUILTIN_TABLE: &str = include_str!("../data/pantone.yaml");

static BUILTIN: OnceLock<PantoneLibrary> = OnceLock::new();

/// A read-only Pantone reference table.
///
/// Constructed once, never mutated; matching methods borrow it immutably
/// so any number of threads can scan concurrently without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct PantoneLibrary {
    entries: Vec<PantoneEntry>,
}

/// A closest-match result: the winning entry plus its distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PantoneMatch<'a> {
    /// The winning reference entry.
    pub entry: &'a PantoneEntry,
    /// Distance from the query to the entry's Lab value.
    pub delta_e: f64,
}

impl PantoneLibrary {
    /// The shared bundled table, parsed once per process.
    ///
    /// The bundled YAML is a compile-time asset; failing to parse it is a
    /// packaging defect, not a runtime condition.
    pub fn builtin() -> &'static PantoneLibrary {
        BUILTIN.get_or_init(|| {
            Self::from_yaml(BUILTIN_TABLE).expect("bundled reference table must parse")
        })
    }

    /// Parses a reference table from YAML.
    pub fn from_yaml(yaml: &str) -> LibraryResult<Self> {
        let entries: Vec<PantoneEntry> = serde_yaml::from_str(yaml)?;
        Ok(Self { entries })
    }

    /// Builds a table from already-constructed entries.
    ///
    /// The fixture-injection path for tests; table order is preserved and
    /// is the tie-break order for [`closest_by_lab`](Self::closest_by_lab).
    pub fn from_entries(entries: Vec<PantoneEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[PantoneEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-match lookup by hex literal.
    ///
    /// The query is lossy-normalized first, so case and shorthand do not
    /// matter. Returns `None` when no entry carries exactly that hex, and
    /// always `None` on an empty table.
    pub fn find_by_hex(&self, hex: &str) -> Option<&PantoneEntry> {
        let needle = HexColor::normalize_lossy(hex);
        self.entries.iter().find(|e| e.hex == needle)
    }

    /// Closest entry by CIEDE2000 distance in Lab.
    pub fn closest_by_lab(&self, lab: Lab) -> Option<PantoneMatch<'_>> {
        self.closest_by_lab_with(lab, DeltaEAlgorithm::Ciede2000)
    }

    /// Closest entry by the selected ΔE formula.
    ///
    /// Linear scan over the whole table. Exact ties keep the first entry
    /// in table order - stable and deterministic, and ties are
    /// measure-zero against measured data anyway.
    pub fn closest_by_lab_with(
        &self,
        lab: Lab,
        algorithm: DeltaEAlgorithm,
    ) -> Option<PantoneMatch<'_>> {
        let mut best: Option<PantoneMatch<'_>> = None;
        for entry in &self.entries {
            let de = delta_e(lab, entry.lab, algorithm);
            if best.as_ref().is_none_or(|b| de < b.delta_e) {
                best = Some(PantoneMatch { entry, delta_e: de });
            }
        }
        best
    }
}
