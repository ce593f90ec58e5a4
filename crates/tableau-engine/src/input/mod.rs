//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their window system's
//! events into [`InputEvent`]s and feed them to [`InputState::apply_event`].

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
