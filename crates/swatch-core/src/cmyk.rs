//! Process-ink CMYK percentages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CMYK ink percentages in [0, 100].
///
/// Always derived from RGB, never authoritative: multiple RGB values round
/// to the same CMYK, so round-tripping through CMYK is lossy by nature.
///
/// Displays in the press-sheet `C/M/Y/K` shorthand:
///
/// ```rust
/// use swatch_core::Cmyk;
///
/// assert_eq!(Cmyk::new(0, 100, 100, 0).to_string(), "0/100/100/0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan percentage.
    pub c: u8,
    /// Magenta percentage.
    pub m: u8,
    /// Yellow percentage.
    pub y: u8,
    /// Key (black) percentage.
    pub k: u8,
}

impl Cmyk {
    /// Creates a CMYK value.
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.c, self.m, self.y, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cmyk::new(12, 0, 5, 98).to_string(), "12/0/5/98");
    }
}
