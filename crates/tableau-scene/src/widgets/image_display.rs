use tableau_engine::coords::{Rect, Vec2};
use tableau_engine::draw::TextureCmd;
use tableau_engine::paint::Color;
use tableau_engine::texture::Texture;

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::transform::Transform;
use crate::widget::{Widget, WidgetBase};

/// A texture drawn at its transform.
///
/// `origin` is the point of the scaled image (from its top-left) placed on
/// the transform's position; rotation pivots around it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDisplay {
    base: WidgetBase,
    image: Texture,
    origin: Vec2,
}

impl ImageDisplay {
    pub fn new(image: Texture, transform: Transform) -> Self {
        Self { base: WidgetBase::new(transform), image, origin: Vec2::zero() }
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn image(&self) -> &Texture {
        &self.image
    }

    pub fn set_image(&mut self, image: Texture) {
        self.image = image;
    }

    #[inline]
    pub fn image_origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }
}

impl Entity for ImageDisplay {
    fn transform(&self) -> &Transform {
        self.base.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.base.transform_mut()
    }

    fn update(&mut self, _ctx: &UpdateCtx<'_>) {}

    fn draw(&self, painter: &mut Painter<'_>) {
        let t = self.base.transform();
        painter.texture(TextureCmd {
            texture: self.image.clone(),
            source: self.image.source_rect(),
            dest: Rect::from_origin_size(t.position, self.image.size() * t.scale),
            pivot: self.origin,
            rotation: t.rotation,
            tint: Color::WHITE,
            outlined: false,
        });
    }
}

impl Widget for ImageDisplay {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
