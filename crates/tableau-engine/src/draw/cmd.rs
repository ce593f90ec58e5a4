use crate::coords::Camera2D;
use crate::paint::Color;

use super::shapes::outline::OutlineParams;
use super::shapes::rect::{RectCmd, RectLinesCmd};
use super::shapes::text::TextCmd;
use super::shapes::texture::TextureCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the stream:
/// - add a new shape module under `draw::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole target with a color.
    Clear(Color),
    /// Everything until the matching `EndWorld` is in world space.
    BeginWorld(Camera2D),
    EndWorld,
    Rect(RectCmd),
    RectLines(RectLinesCmd),
    Text(TextCmd),
    Texture(TextureCmd),
    /// Uniforms for the outline effect used by the next outlined texture.
    OutlineConfig(OutlineParams),
}
