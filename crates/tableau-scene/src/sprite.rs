use tableau_engine::coords::Rect;
use tableau_engine::draw::TextureCmd;
use tableau_engine::paint::Color;
use tableau_engine::texture::Texture;

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::transform::Transform;

/// A world-space texture centered on its transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    transform: Transform,
    texture: Texture,
    tint: Color,
}

impl Sprite {
    pub fn new(texture: Texture, transform: Transform) -> Self {
        Self { transform, texture, tint: Color::WHITE }
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    #[inline]
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = texture;
    }
}

impl Entity for Sprite {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn update(&mut self, _ctx: &UpdateCtx<'_>) {}

    fn draw(&self, painter: &mut Painter<'_>) {
        let size = self.texture.size() * self.transform.scale;
        painter.texture(TextureCmd {
            texture: self.texture.clone(),
            source: self.texture.source_rect(),
            dest: Rect::from_origin_size(self.transform.position, size),
            pivot: size / 2.0,
            rotation: self.transform.rotation,
            tint: self.tint,
            outlined: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use tableau_engine::coords::Vec2;
    use tableau_engine::draw::DrawCmd;

    use super::*;
    use crate::testing::record;

    #[test]
    fn pivot_is_the_scaled_center() {
        let sprite = Sprite::new(Texture::solid(10, 4, [0, 255, 0, 255]), Transform::at(Vec2::new(50.0, 50.0)).with_scale(3.0));
        let list = record(|p| sprite.draw(p));

        let DrawCmd::Texture(cmd) = &list.items()[0] else { panic!("expected texture") };
        assert_eq!(cmd.dest, Rect::new(50.0, 50.0, 30.0, 12.0));
        assert_eq!(cmd.pivot, Vec2::new(15.0, 6.0));
    }
}
