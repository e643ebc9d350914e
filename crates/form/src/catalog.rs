//! Static catalogs: postal records and color choices.
//!
//! Both catalogs are authored in code, ordered, and read-only for the process
//! lifetime. The postal catalog backs the prefix lookup that derives city and
//! state; the color catalog only populates the picker control.

/// One postal code with its resolved city and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalRecord {
    pub code: &'static str,
    pub city: &'static str,
    pub state: &'static str,
}

/// Length a typed prefix must reach before a lookup is attempted.
///
/// The lookup fires at exactly this length and does not re-fire on longer or
/// shorter input.
pub const LOOKUP_PREFIX_LEN: usize = 3;

/// Ordered postal catalog compiled into the binary.
pub const POSTAL_CATALOG: &[PostalRecord] = &[
    PostalRecord {
        code: "110001",
        city: "New Delhi",
        state: "Delhi",
    },
    PostalRecord {
        code: "400001",
        city: "Mumbai",
        state: "Maharashtra",
    },
    PostalRecord {
        code: "560001",
        city: "Bengaluru",
        state: "Karnataka",
    },
    PostalRecord {
        code: "600001",
        city: "Chennai",
        state: "Tamil Nadu",
    },
    PostalRecord {
        code: "700001",
        city: "Kolkata",
        state: "West Bengal",
    },
    PostalRecord {
        code: "500001",
        city: "Hyderabad",
        state: "Telangana",
    },
    PostalRecord {
        code: "380001",
        city: "Ahmedabad",
        state: "Gujarat",
    },
    PostalRecord {
        code: "411001",
        city: "Pune",
        state: "Maharashtra",
    },
    PostalRecord {
        code: "302001",
        city: "Jaipur",
        state: "Rajasthan",
    },
    PostalRecord {
        code: "226001",
        city: "Lucknow",
        state: "Uttar Pradesh",
    },
    PostalRecord {
        code: "160017",
        city: "Chandigarh",
        state: "Chandigarh",
    },
    PostalRecord {
        code: "682001",
        city: "Kochi",
        state: "Kerala",
    },
];

/// Find the first record whose code contains `prefix` as a substring.
///
/// Only defined for prefixes of exactly [`LOOKUP_PREFIX_LEN`] characters; any
/// other length yields `None` without scanning. A containment match (rather
/// than a prefix match) is intentional.
pub fn lookup<'a>(catalog: &'a [PostalRecord], prefix: &str) -> Option<&'a PostalRecord> {
    if prefix.chars().count() != LOOKUP_PREFIX_LEN {
        return None;
    }

    catalog.iter().find(|record| record.code.contains(prefix))
}

/// One entry of the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChoice {
    /// Display name shown in the picker.
    pub label: &'static str,
    /// Stable key stored as the preference value.
    pub key: &'static str,
}

/// Key of the preselected color.
pub const DEFAULT_COLOR: &str = "black";

/// Ordered color catalog offered by the picker control.
pub const COLOR_CATALOG: &[ColorChoice] = &[
    ColorChoice {
        label: "Black",
        key: "black",
    },
    ColorChoice {
        label: "Red",
        key: "red",
    },
    ColorChoice {
        label: "Green",
        key: "green",
    },
    ColorChoice {
        label: "Blue",
        key: "blue",
    },
    ColorChoice {
        label: "Yellow",
        key: "yellow",
    },
    ColorChoice {
        label: "Purple",
        key: "purple",
    },
    ColorChoice {
        label: "Orange",
        key: "orange",
    },
    ColorChoice {
        label: "Pink",
        key: "pink",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CATALOG: &[PostalRecord] = &[
        PostalRecord {
            code: "12345",
            city: "Metropolis",
            state: "NY",
        },
        PostalRecord {
            code: "23456",
            city: "Gotham",
            state: "NJ",
        },
    ];

    #[test]
    fn lookup_matches_three_character_prefix() {
        let record = lookup(TEST_CATALOG, "123").unwrap();
        assert_eq!(record.code, "12345");
        assert_eq!(record.city, "Metropolis");
        assert_eq!(record.state, "NY");
    }

    #[test]
    fn lookup_matches_substring_not_just_prefix() {
        // "345" occurs inside "12345", so the first containing record wins.
        let record = lookup(TEST_CATALOG, "345").unwrap();
        assert_eq!(record.code, "12345");
    }

    #[test]
    fn lookup_first_match_wins() {
        // "234" is contained in both codes; catalog order decides.
        let record = lookup(TEST_CATALOG, "234").unwrap();
        assert_eq!(record.code, "12345");
    }

    #[test]
    fn lookup_requires_exact_prefix_length() {
        assert!(lookup(TEST_CATALOG, "12").is_none());
        assert!(lookup(TEST_CATALOG, "1234").is_none());
        assert!(lookup(TEST_CATALOG, "").is_none());
    }

    #[test]
    fn lookup_unknown_prefix_is_none() {
        assert!(lookup(TEST_CATALOG, "999").is_none());
    }

    #[test]
    fn builtin_catalogs_are_populated() {
        assert!(!POSTAL_CATALOG.is_empty());
        assert!(!COLOR_CATALOG.is_empty());
        assert!(COLOR_CATALOG.iter().any(|choice| choice.key == DEFAULT_COLOR));
        // Built-in codes resolve through the lookup by their own first three digits.
        let record = lookup(POSTAL_CATALOG, "110").unwrap();
        assert_eq!(record.city, "New Delhi");
    }
}
