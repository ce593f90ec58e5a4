use tableau_engine::coords::{Rect, Vec2};
use tableau_engine::paint::Color;

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::transform::Transform;
use crate::widget::{Widget, WidgetBase};

/// A filled rectangle with an optional edge, anchored at its top-left corner.
///
/// Panels are purely decorative: `update` does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    base: WidgetBase,
    dimensions: Vec2,
    color: Color,
    edge_color: Color,
    /// Edge width in pixels; `0` draws no edge.
    edge_thickness: u32,
}

impl Panel {
    pub fn new(transform: Transform, dimensions: Vec2) -> Self {
        Self {
            base: WidgetBase::new(transform),
            dimensions,
            color: Color::WHITE,
            edge_color: Color::WHITE,
            edge_thickness: 0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn edge(mut self, color: Color, thickness: u32) -> Self {
        self.edge_color = color;
        self.edge_thickness = thickness;
        self
    }

    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: Vec2) {
        self.dimensions = dimensions;
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        self.color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn edge_thickness(&self) -> u32 {
        self.edge_thickness
    }

    /// Screen rectangle covered by the panel.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.base.transform().position, self.dimensions)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(Transform::default(), Vec2::zero())
    }
}

impl Entity for Panel {
    fn transform(&self) -> &Transform {
        self.base.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.base.transform_mut()
    }

    fn update(&mut self, _ctx: &UpdateCtx<'_>) {}

    fn draw(&self, painter: &mut Painter<'_>) {
        let rect = self.rect();
        painter.fill_rect(rect, self.color);
        if self.edge_thickness > 0 {
            painter.stroke_rect(rect, self.edge_thickness as f32, self.edge_color);
        }
    }
}

impl Widget for Panel {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use tableau_engine::draw::DrawCmd;

    use super::*;
    use crate::testing::record;

    #[test]
    fn draws_fill_then_edge() {
        let panel = Panel::new(Transform::at(Vec2::new(10.0, 20.0)), Vec2::new(300.0, 200.0))
            .color(Color::BLACK)
            .edge(Color::WHITE, 3);
        let list = record(|p| panel.draw(p));

        assert_eq!(list.len(), 2);
        let DrawCmd::Rect(fill) = &list.items()[0] else { panic!("expected fill first") };
        assert_eq!(fill.rect, Rect::new(10.0, 20.0, 300.0, 200.0));
        assert_eq!(fill.color, Color::BLACK);
        let DrawCmd::RectLines(edge) = &list.items()[1] else { panic!("expected edge second") };
        assert_eq!(edge.rect, fill.rect);
        assert_eq!(edge.border.width, 3.0);
    }

    #[test]
    fn zero_thickness_skips_edge() {
        let panel = Panel::new(Transform::default(), Vec2::new(5.0, 5.0));
        let list = record(|p| panel.draw(p));
        assert_eq!(list.len(), 1);
    }
}
