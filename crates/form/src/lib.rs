pub mod catalog;
pub mod field;
pub mod format;
pub mod record;
pub mod state;
pub mod validate;

pub use catalog::{ColorChoice, PostalRecord, COLOR_CATALOG, DEFAULT_COLOR, POSTAL_CATALOG};
pub use field::{FieldId, Gender};
pub use record::SavedRecord;
pub use state::FormState;
pub use validate::FieldStatus;
