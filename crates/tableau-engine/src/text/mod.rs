//! Text measurement.
//!
//! Layout code only needs extents, so it depends on the [`TextMetrics`]
//! trait; [`FontSystem`] is the fontdue-backed implementation.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

use crate::coords::Vec2;

/// Measures the extents of a single line of text.
pub trait TextMetrics {
    /// Returns `(width, height)` in logical pixels of `text` rendered at
    /// `size` with `spacing` extra pixels between glyphs.
    fn measure(&self, text: &str, font: Option<FontId>, size: f32, spacing: f32) -> Vec2;
}
