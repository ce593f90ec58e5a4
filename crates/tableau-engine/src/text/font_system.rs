use crate::coords::Vec2;

use super::TextMetrics;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Average advance of the fallback estimate, as a fraction of the font size.
const FALLBACK_ADVANCE: f32 = 0.5;

/// Owns a collection of loaded fonts.
///
/// The first loaded font is the default used when a draw command names no
/// font. Without any font loaded, measurement falls back to a fixed-advance
/// estimate so layout still produces stable, non-zero extents.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// The font named by `id`, or the default font for `None`.
    pub(crate) fn resolve(&self, id: Option<FontId>) -> Option<&fontdue::Font> {
        match id {
            Some(id) => self.fonts.get(id.0),
            None => self.fonts.first(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl TextMetrics for FontSystem {
    fn measure(&self, text: &str, font: Option<FontId>, size: f32, spacing: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let glyph_count = text.chars().count();
        if glyph_count == 0 {
            return Vec2::new(0.0, size);
        }
        let gaps = (glyph_count - 1) as f32 * spacing;

        let Some(font) = self.resolve(font) else {
            return Vec2::new(glyph_count as f32 * size * FALLBACK_ADVANCE + gaps, size);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        // Pen position after each glyph rather than the bitmap right edge, so
        // trailing spaces and side bearings count toward the width.
        let w = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = layout
            .glyphs()
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(size, f32::max);
        Vec2::new(w + gaps, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_estimate_scales_with_length_and_spacing() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure("abcd", None, 10.0, 1.0), Vec2::new(23.0, 10.0));
    }

    #[test]
    fn empty_text_has_zero_width() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure("", None, 12.0, 1.0).x, 0.0);
    }

    #[test]
    fn invalid_font_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.is_empty());
    }
}
