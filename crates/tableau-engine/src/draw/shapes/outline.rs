use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList};
use crate::paint::Color;

/// Uniforms of the outline/tint effect.
///
/// Backends keep these as shader state: once recorded, they apply to every
/// subsequent texture command with `outlined == true` until the next
/// `OutlineConfig`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutlineParams {
    pub enabled: bool,
    /// Outline thickness in logical pixels.
    pub thickness: f32,
    pub color: Color,
    /// On-screen size of the texture the effect samples.
    pub texture_size: Vec2,
    /// Color blended over the texture; alpha is the blend strength.
    pub tint: Color,
}

impl DrawList {
    /// Records new outline uniforms.
    #[inline]
    pub fn push_outline_config(&mut self, params: OutlineParams) {
        self.push(DrawCmd::OutlineConfig(params));
    }
}
