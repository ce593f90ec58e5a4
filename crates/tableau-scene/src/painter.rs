use tableau_engine::coords::{Camera2D, Rect, Vec2};
use tableau_engine::draw::{DrawList, OutlineParams, TextCmd, TextureCmd};
use tableau_engine::paint::Color;
use tableau_engine::text::{FontId, TextMetrics};

use crate::settings::Settings;

/// Drawing surface passed to every `draw` call.
///
/// Wraps the engine's `DrawList` with a small immediate-mode API and exposes
/// text measurement and the frame's settings.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    metrics: &'a dyn TextMetrics,
    /// Settings of the frame being drawn.
    pub settings: &'a Settings,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, metrics: &'a dyn TextMetrics, settings: &'a Settings) -> Self {
        Self { draw_list, metrics, settings }
    }

    // ── passes ────────────────────────────────────────────────────────────

    pub fn clear(&mut self, color: Color) {
        self.draw_list.push_clear(color);
    }

    /// Starts the camera-transformed pass. Must be paired with [`end_world`](Self::end_world).
    pub fn begin_world(&mut self, camera: Camera2D) {
        self.draw_list.begin_world(camera);
    }

    pub fn end_world(&mut self) {
        self.draw_list.end_world();
    }

    #[inline]
    pub fn in_world(&self) -> bool {
        self.draw_list.world_camera().is_some()
    }

    // ── text measurement ──────────────────────────────────────────────────

    pub fn measure_text(&self, text: &str, font: Option<FontId>, size: f32, spacing: f32) -> Vec2 {
        self.metrics.measure(text, font, size, spacing)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Rectangle outline, `thickness` pixels wide, inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.draw_list.push_rect_lines(rect, thickness, color);
    }

    pub fn text(&mut self, cmd: TextCmd) {
        self.draw_list.push_text(cmd);
    }

    pub fn texture(&mut self, cmd: TextureCmd) {
        self.draw_list.push_texture(cmd);
    }

    /// Sets the outline effect uniforms for the following outlined textures.
    pub fn configure_outline(&mut self, params: OutlineParams) {
        self.draw_list.push_outline_config(params);
    }
}
