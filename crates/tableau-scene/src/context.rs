use tableau_engine::coords::Vec2;
use tableau_engine::input::{InputFrame, InputState, Key, MouseButton};

use crate::settings::Settings;

/// Everything an `update` call may read.
///
/// Built by the host once per frame from its input state; borrowed by every
/// entity and widget updated in that frame.
#[derive(Clone, Copy)]
pub struct UpdateCtx<'a> {
    pub input: &'a InputState,
    pub frame: &'a InputFrame,
    pub settings: &'a Settings,
}

impl<'a> UpdateCtx<'a> {
    pub fn new(input: &'a InputState, frame: &'a InputFrame, settings: &'a Settings) -> Self {
        Self { input, frame, settings }
    }

    /// Current pointer position, or `None` while the pointer is outside the window.
    #[inline]
    pub fn pointer_pos(&self) -> Option<Vec2> {
        self.input.pointer_pos.map(Vec2::from)
    }

    /// `true` while `button` is held.
    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.input.button_down(button)
    }

    /// `true` only in the frame `button` went down.
    #[inline]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.frame.button_pressed(button)
    }

    /// `true` only in the frame `button` went up.
    #[inline]
    pub fn button_released(&self, button: MouseButton) -> bool {
        self.frame.button_released(button)
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.input.key_down(key)
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.frame.key_pressed(key)
    }
}
