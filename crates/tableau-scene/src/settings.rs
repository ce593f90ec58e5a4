//! Runtime settings passed explicitly to update and draw.

use tableau_engine::paint::Color;

/// Tunables shared by every frame.
///
/// Built once at startup and handed to every frame through
/// [`UpdateCtx`](crate::UpdateCtx) and [`Painter`](crate::Painter).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Alpha of the tint blended over a hovered or pressed button.
    pub highlight_strength: f32,
    /// Button outline thickness per unit of transform scale.
    pub outline_scale: f32,
    pub outline_color: Color,
    /// Extra advance between glyphs used by labels.
    pub text_spacing: f32,
}

impl Settings {
    pub fn highlight_strength(mut self, v: f32) -> Self {
        self.highlight_strength = v.clamp(0.0, 1.0);
        self
    }

    pub fn outline_scale(mut self, v: f32) -> Self {
        self.outline_scale = v.max(0.0);
        self
    }

    pub fn outline_color(mut self, color: Color) -> Self {
        self.outline_color = color;
        self
    }

    pub fn text_spacing(mut self, v: f32) -> Self {
        self.text_spacing = v;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_strength: 0.15,
            outline_scale: 0.75,
            outline_color: Color::WHITE,
            text_spacing: 1.0,
        }
    }
}
