use tableau_engine::coords::Vec2;
use tableau_engine::draw::TextCmd;
use tableau_engine::paint::Color;
use tableau_engine::text::FontId;

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::transform::Transform;
use crate::widget::{Widget, WidgetBase};

/// Horizontal anchoring of a label's text relative to its position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Alignment {
    /// Text starts at the position.
    #[default]
    Left,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    Right,
}

impl Alignment {
    /// Horizontal pivot for a text block `width` pixels wide.
    #[inline]
    pub fn pivot_x(self, width: f32) -> f32 {
        match self {
            Alignment::Left => 0.0,
            Alignment::Middle => width / 2.0,
            Alignment::Right => width,
        }
    }
}

/// A single line of text, vertically centered on its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    base: WidgetBase,
    text: String,
    text_size: f32,
    text_color: Color,
    alignment: Alignment,
    /// `None` uses the backend's default font.
    font: Option<FontId>,
}

impl Label {
    pub fn new(text: impl Into<String>, transform: Transform) -> Self {
        Self {
            base: WidgetBase::new(transform),
            text: text.into(),
            text_size: 20.0,
            text_color: Color::BLACK,
            alignment: Alignment::Left,
            font: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }

    #[inline]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    #[inline]
    pub fn text_alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    #[inline]
    pub fn text_font(&self) -> Option<FontId> {
        self.font
    }

    pub fn set_font(&mut self, font: Option<FontId>) {
        self.font = font;
    }

    /// Point of the measured text block that lands on the label's position.
    pub fn pivot(&self, painter: &Painter<'_>) -> Vec2 {
        let extent =
            painter.measure_text(&self.text, self.font, self.text_size, painter.settings.text_spacing);
        Vec2::new(self.alignment.pivot_x(extent.x), extent.y / 2.0)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("", Transform::default())
    }
}

impl Entity for Label {
    fn transform(&self) -> &Transform {
        self.base.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.base.transform_mut()
    }

    fn update(&mut self, _ctx: &UpdateCtx<'_>) {}

    fn draw(&self, painter: &mut Painter<'_>) {
        let pivot = self.pivot(painter);
        let transform = self.base.transform();
        painter.text(TextCmd {
            text: self.text.clone(),
            font: self.font,
            size: self.text_size,
            spacing: painter.settings.text_spacing,
            color: self.text_color,
            position: transform.position,
            pivot,
            rotation: transform.rotation,
        });
    }
}

impl Widget for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
