//! The persisted snapshot of a submitted form.

use crate::field::Gender;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the form taken at submit time.
///
/// Persisted verbatim as a single JSON object and retrieved verbatim later;
/// the newest save replaces any previous one. Property names are camelCase
/// in the stored JSON. The color preference is display state only and is not
/// part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub postal_code: String,
    pub city: String,
    pub state: String,
}
