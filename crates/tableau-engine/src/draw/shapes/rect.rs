use crate::coords::Rect;
use crate::draw::{DrawCmd, DrawList};
use crate::paint::Color;

use super::Border;

/// Filled rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Rectangle outline draw payload. The stroke grows inward from `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct RectLinesCmd {
    pub rect: Rect,
    pub border: Border,
}

impl DrawList {
    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a rectangle outline of `thickness` logical pixels.
    #[inline]
    pub fn push_rect_lines(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.push(DrawCmd::RectLines(RectLinesCmd { rect, border: Border::new(thickness, color) }));
    }
}
