//! Field identifiers for the details screen.
//!
//! The render surface addresses every editable control through a [`FieldId`];
//! the aggregate state routes raw input per field (see `state.rs`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identifier of one editable field on the details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    MobileNumber,
    DateOfBirth,
    Gender,
    PostalCode,
    /// Derived from the postal lookup; the control itself is read-only.
    City,
    /// Derived from the postal lookup; the control itself is read-only.
    State,
    ColorPreference,
}

/// Selection offered by the gender radio group.
///
/// Raw radio values arrive as `"male"` / `"female"`; parsing is
/// case-insensitive and serialization is lowercase on both the strum and
/// serde sides so the persisted record round-trips the radio value verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn gender_parses_radio_values() {
        assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
        assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
        assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
        assert!(Gender::from_str("other").is_err());
    }

    #[test]
    fn gender_displays_lowercase() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn field_id_names_are_stable() {
        assert_eq!(FieldId::MobileNumber.to_string(), "mobileNumber");
        assert_eq!(FieldId::DateOfBirth.to_string(), "dateOfBirth");
        assert_eq!(FieldId::PostalCode.to_string(), "postalCode");
    }
}
