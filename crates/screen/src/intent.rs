//! User intents the render surface dispatches into the controller.

use form::FieldId;

/// One user interaction on the details screen.
///
/// The render surface owns widgets and events; the controller only ever sees
/// these intents. All of them are handled on the surface's sequential event
/// queue, so no two intents are ever in flight at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Raw input arrived in the control bound to `field`.
    Edit(FieldId, String),
    /// The submit button was pressed.
    Submit,
    /// The show-data button was pressed.
    ShowSaved,
    /// The reset button was pressed.
    Reset,
}
