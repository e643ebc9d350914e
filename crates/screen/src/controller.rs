//! Top-level controller for the details screen.
//!
//! Owns the form state, the record store, and the currently displayed saved
//! record; there is no ambient screen state anywhere else. The controller is
//! driven exclusively through [`Intent`] values and observed exclusively
//! through [`render`].
//!
//! Storage failures are terminal for the attempt: they are logged and
//! swallowed, the in-memory state stays as it was, and nothing retries.
//!
//! [`render`]: ScreenController::render

use crate::intent::Intent;
use crate::view::{FieldView, ScreenView};
use form::{validate, FieldId, FormState, SavedRecord, COLOR_CATALOG};
use store::RecordStore;

/// Controller binding one [`FormState`] to one [`RecordStore`].
pub struct ScreenController {
    form: FormState,
    store: RecordStore,
    displayed: Option<SavedRecord>,
}

impl ScreenController {
    /// Create a controller over the given store with an empty form.
    pub fn new(store: RecordStore) -> Self {
        Self::with_form(FormState::new(), store)
    }

    /// Create a controller over a prepared form (tests inject a postal
    /// catalog this way).
    pub fn with_form(form: FormState, store: RecordStore) -> Self {
        Self {
            form,
            store,
            displayed: None,
        }
    }

    /// Controller wired to the app's standard on-disk storage.
    pub fn on_disk() -> Self {
        let ctx = paths::PathContext::new("intake");
        if let Err(err) = ctx.ensure_directories() {
            log::warn!("could not prepare data directory: {}", err);
        }
        Self::new(RecordStore::on_disk(&ctx))
    }

    /// The editable form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The saved record currently shown below the form, if any.
    pub fn displayed(&self) -> Option<&SavedRecord> {
        self.displayed.as_ref()
    }

    /// Apply one user intent.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Edit(field, raw) => self.form.set_field(field, &raw),
            Intent::Submit => self.submit(),
            Intent::ShowSaved => self.show_saved(),
            Intent::Reset => self.reset(),
        }
    }

    fn submit(&mut self) {
        // The submit control is disabled while the gate is closed; an intent
        // arriving anyway is dropped.
        let Some(record) = self.form.snapshot() else {
            return;
        };

        match self.store.save(&record) {
            Ok(()) => log::info!("record saved"),
            Err(err) => log::warn!("saving record failed: {}", err),
        }
    }

    fn show_saved(&mut self) {
        match self.store.load() {
            Ok(record) => self.displayed = record,
            Err(err) => {
                log::warn!("loading record failed: {}", err);
                self.displayed = None;
            }
        }
    }

    fn reset(&mut self) {
        self.form.clear();
        self.displayed = None;

        if let Err(err) = self.store.delete() {
            log::warn!("deleting record failed: {}", err);
        }
    }

    /// Project the current state for the render surface.
    pub fn render(&self) -> ScreenView {
        let form = &self.form;

        ScreenView {
            name: field_view(FieldId::Name, &form.name),
            email: field_view(FieldId::Email, &form.email),
            mobile_number: field_view(FieldId::MobileNumber, &form.mobile_number),
            date_of_birth: field_view(FieldId::DateOfBirth, &form.date_of_birth),
            gender: form.gender,
            postal_code: field_view(FieldId::PostalCode, &form.postal_code),
            city: field_view(FieldId::City, &form.city),
            state: field_view(FieldId::State, &form.state),
            color_preference: form.color_preference.clone(),
            colors: COLOR_CATALOG,
            submit_disabled: form.can_submit(),
            show_disabled: self.displayed.is_some(),
            reset_disabled: self.displayed.is_none(),
            displayed: self.displayed.clone(),
        }
    }
}

fn field_view(field: FieldId, value: &str) -> FieldView {
    FieldView {
        value: value.to_string(),
        status: validate::field_status(field, value),
    }
}
