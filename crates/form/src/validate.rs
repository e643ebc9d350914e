//! Field validators driving the presentational feedback.
//!
//! Validators classify a value for visual cues (the render surface paints the
//! field border from the verdict). They never gate submission: the submit
//! control is enabled purely on field presence, and that decoupling is
//! observable behavior. All predicates are pure and total.

use crate::field::FieldId;
use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Letters, whitespace and apostrophes; the empty string is accepted.
    static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z\s']*$").expect("static name pattern");
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"(?i)^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("static email pattern");
}

/// True iff every character is a letter, whitespace or apostrophe.
///
/// The empty string is valid; an untouched name field reads as valid.
pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Case-insensitive mailbox@domain.tld shape check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a (formatted or raw) date for the `DD-MM-YYYY` shape.
///
/// Accepts exactly eight digits with day <= 31, month <= 12 and year no later
/// than the current calendar year. Deliberately weak: no lower bounds, no
/// month-length or leap-year cross-check.
pub fn is_valid_date(value: &str) -> bool {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 8 {
        return false;
    }

    let (Ok(day), Ok(month), Ok(year)) = (
        digits[0..2].parse::<u32>(),
        digits[2..4].parse::<u32>(),
        digits[4..8].parse::<i32>(),
    ) else {
        return false;
    };

    day <= 31 && month <= 12 && year <= Local::now().year()
}

/// Presentational verdict for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

/// Classify a field value for display purposes.
///
/// Only name, email and date of birth carry validators; every other field is
/// always reported valid.
pub fn field_status(field: FieldId, value: &str) -> FieldStatus {
    let ok = match field {
        FieldId::Name => is_valid_name(value),
        FieldId::Email => is_valid_email(value),
        FieldId::DateOfBirth => is_valid_date(value),
        _ => true,
    };

    if ok {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    }
}
