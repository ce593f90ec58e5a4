use crate::coords::{Rect, Vec2};
use crate::draw::{DrawCmd, DrawList};
use crate::paint::Color;
use crate::texture::Texture;

/// Textured quad draw payload.
///
/// `source` selects texels (in texture pixels); `dest.size` is the on-screen
/// size (logical pixels). The point `pivot`, measured from the quad's
/// top-left, is placed at `dest.origin`, and the quad rotates by `rotation`
/// radians around it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureCmd {
    pub texture: Texture,
    pub source: Rect,
    pub dest: Rect,
    pub pivot: Vec2,
    pub rotation: f32,
    pub tint: Color,
    /// Render through the outline effect configured by the preceding
    /// [`DrawCmd::OutlineConfig`].
    pub outlined: bool,
}

impl TextureCmd {
    /// Whole texture at `position`, scaled uniformly, no pivot, white tint.
    pub fn scaled(texture: Texture, position: Vec2, rotation: f32, scale: f32) -> Self {
        let source = texture.source_rect();
        let dest = Rect::from_origin_size(position, texture.size() * scale);
        Self { texture, source, dest, pivot: Vec2::zero(), rotation, tint: Color::WHITE, outlined: false }
    }
}

impl DrawList {
    /// Records a textured quad draw command.
    #[inline]
    pub fn push_texture(&mut self, cmd: TextureCmd) {
        self.push(DrawCmd::Texture(cmd));
    }
}
