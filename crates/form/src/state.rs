//! Aggregate state of the details form.
//!
//! One [`FormState`] instance holds every editable field value plus the
//! derived submit gate. Raw input is routed per field: masked inputs run
//! through the formatter, the postal code through the catalog lookup, the
//! gender through enum parsing. Every mutation ends by recomputing the gate.

use crate::catalog::{self, PostalRecord, DEFAULT_COLOR, POSTAL_CATALOG};
use crate::field::{FieldId, Gender};
use crate::format::{format_date, format_phone};
use crate::record::SavedRecord;
use std::str::FromStr;

/// Mutable state captured while editing the details form.
///
/// `can_submit` is `true` while required fields are missing; the submit
/// control binds its *disabled* property to it. The color preference never
/// participates in gating.
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub color_preference: String,
    can_submit: bool,
    postal_catalog: &'static [PostalRecord],
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            date_of_birth: String::new(),
            gender: None,
            postal_code: String::new(),
            city: String::new(),
            state: String::new(),
            color_preference: DEFAULT_COLOR.to_string(),
            can_submit: true,
            postal_catalog: POSTAL_CATALOG,
        }
    }
}

impl FormState {
    /// Create an empty form backed by the built-in postal catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the postal catalog (used by tests and embedders shipping
    /// their own region data).
    pub fn with_postal_catalog(mut self, catalog: &'static [PostalRecord]) -> Self {
        self.postal_catalog = catalog;
        self
    }

    /// True while submission is disabled (some required field is missing).
    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    /// Route one raw input value to its field and renormalize derived state.
    pub fn set_field(&mut self, field: FieldId, raw: &str) {
        match field {
            FieldId::Name => self.name = raw.to_string(),
            FieldId::Email => self.email = raw.to_string(),
            FieldId::MobileNumber => self.mobile_number = format_phone(raw),
            FieldId::DateOfBirth => self.date_of_birth = format_date(raw),
            FieldId::Gender => self.gender = Gender::from_str(raw).ok(),
            FieldId::PostalCode => self.apply_postal_input(raw),
            FieldId::City => self.city = raw.to_string(),
            FieldId::State => self.state = raw.to_string(),
            FieldId::ColorPreference => self.color_preference = raw.to_string(),
        }

        self.recompute_can_submit();
    }

    /// Postal input drives a three-character lookup against the catalog.
    ///
    /// On a match the typed prefix is replaced by the matched record's full
    /// code and city/state are derived from it. On a miss (or any other
    /// input length) the raw input is kept and city/state are cleared.
    fn apply_postal_input(&mut self, raw: &str) {
        if raw.chars().count() == catalog::LOOKUP_PREFIX_LEN {
            if let Some(record) = catalog::lookup(self.postal_catalog, raw) {
                self.postal_code = record.code.to_string();
                self.city = record.city.to_string();
                self.state = record.state.to_string();
                return;
            }
        }

        self.postal_code = raw.to_string();
        self.city.clear();
        self.state.clear();
    }

    /// Presence-only gate over the eight required fields.
    fn recompute_can_submit(&mut self) {
        let all_present = !self.name.is_empty()
            && !self.email.is_empty()
            && !self.mobile_number.is_empty()
            && !self.postal_code.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && self.gender.is_some()
            && !self.date_of_birth.is_empty();

        self.can_submit = !all_present;
    }

    /// Snapshot the current values for persistence.
    ///
    /// Returns `None` while the presence gate is closed; the gate closing
    /// guarantees a gender selection exists, so the snapshot is total.
    pub fn snapshot(&self) -> Option<SavedRecord> {
        if self.can_submit {
            return None;
        }

        let gender = self.gender?;

        Some(SavedRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile_number: self.mobile_number.clone(),
            date_of_birth: self.date_of_birth.clone(),
            gender,
            postal_code: self.postal_code.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        })
    }

    /// Reset every field to its empty/default value.
    pub fn clear(&mut self) {
        let catalog = self.postal_catalog;
        *self = Self {
            postal_catalog: catalog,
            ..Self::default()
        };
    }
}
