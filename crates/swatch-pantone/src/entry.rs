//! Reference table entries.

use serde::{Deserialize, Serialize};
use swatch_core::{HexColor, Lab};

/// One row of the reference table.
///
/// The Lab triplet is the authoritative measurement; the hex field is the
/// derived sRGB rendering used for exact-match lookup and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantoneEntry {
    /// Full display name, e.g. `PANTONE 185 C`.
    pub name: String,
    /// Short code, e.g. `185 C`.
    pub code: String,
    /// Measured Lab coordinates.
    pub lab: Lab,
    /// Derived display hex.
    pub hex: HexColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_yaml() {
        let yaml = r##"
name: "PANTONE 185 C"
code: "185 C"
lab: { l: 49.2, a: 72.4, b: 46.0 }
hex: "#E4002B"
"##;
        let entry: PantoneEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.code, "185 C");
        // Hex normalizes on the way in.
        assert_eq!(entry.hex.as_str(), "#e4002b");
    }

    #[test]
    fn test_rejects_malformed_hex() {
        let yaml = r#"
name: "PANTONE 185 C"
code: "185 C"
lab: { l: 49.2, a: 72.4, b: 46.0 }
hex: "e4002b"
"#;
        assert!(serde_yaml::from_str::<PantoneEntry>(yaml).is_err());
    }
}
