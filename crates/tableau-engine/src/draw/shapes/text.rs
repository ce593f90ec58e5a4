use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList};
use crate::paint::Color;
use crate::text::FontId;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// `None` selects the backend's default font.
    pub font: Option<FontId>,
    /// Font size in logical pixels.
    pub size: f32,
    /// Extra advance between glyphs in logical pixels.
    pub spacing: f32,
    pub color: Color,
    /// Anchor point of the text block in logical pixels.
    pub position: Vec2,
    /// Offset from the text block's top-left to the anchor; rotation pivots here.
    pub pivot: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
}

impl DrawList {
    /// Records a text draw command.
    #[inline]
    pub fn push_text(&mut self, cmd: TextCmd) {
        self.push(DrawCmd::Text(cmd));
    }
}
