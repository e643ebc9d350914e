//! Pure render projection handed to the rendering surface.
//!
//! `ScreenView` is a plain value: no widget handles, no framework types. The
//! surface draws whatever one frame of it says and reports interactions back
//! as intents.

use form::{ColorChoice, FieldStatus, Gender, SavedRecord};

/// Display model for one text-like field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// The normalized value to show in the control.
    pub value: String,
    /// Presentational verdict (drives the border color cue).
    pub status: FieldStatus,
}

/// Everything the render surface needs to draw the details screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub name: FieldView,
    pub email: FieldView,
    pub mobile_number: FieldView,
    pub date_of_birth: FieldView,
    /// Current radio selection, if any.
    pub gender: Option<Gender>,
    pub postal_code: FieldView,
    /// Derived, read-only in the UI.
    pub city: FieldView,
    /// Derived, read-only in the UI.
    pub state: FieldView,
    /// Key of the currently chosen color.
    pub color_preference: String,
    /// Catalog backing the color picker.
    pub colors: &'static [ColorChoice],
    /// Disabled state of the submit button (presence gate).
    pub submit_disabled: bool,
    /// Disabled state of the show-data button (already displaying).
    pub show_disabled: bool,
    /// Disabled state of the reset button (nothing displayed yet).
    pub reset_disabled: bool,
    /// The stored record being displayed below the form, if any.
    pub displayed: Option<SavedRecord>,
}
