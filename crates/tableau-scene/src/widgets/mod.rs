//! Concrete widgets.

pub mod button;
pub mod image_display;
pub mod label;
pub mod panel;
pub mod variable_display;

pub use button::{Button, ButtonState, DEFAULT_CANVAS_MARGIN};
pub use image_display::ImageDisplay;
pub use label::{Alignment, Label};
pub use panel::Panel;
pub use variable_display::VariableDisplay;
