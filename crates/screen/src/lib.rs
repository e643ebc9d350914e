pub mod controller;
pub mod intent;
pub mod view;

pub use controller::ScreenController;
pub use intent::Intent;
pub use view::{FieldView, ScreenView};
