use tableau_engine::draw::DrawList;
use tableau_engine::input::{InputEvent, InputFrame, InputState};
use tableau_engine::text::{FontId, FontLoadError, FontSystem};

use crate::context::UpdateCtx;
use crate::manager::SceneManager;
use crate::painter::Painter;
use crate::settings::Settings;

/// Top-level coordinator a host drives once per frame.
///
/// Owns the scenes, the runtime settings, loaded fonts, input state and the
/// `DrawList` filled by [`frame`](Self::frame). The host feeds platform
/// events through [`handle_event`](Self::handle_event) and hands the returned
/// draw list to its renderer.
///
/// # Example
///
/// ```rust,ignore
/// let mut stage = Stage::new(Settings::default());
/// stage.scenes.add_scene("menu", build_menu())?;
/// stage.scenes.load_scene("menu")?;
///
/// // In the host loop:
/// for ev in platform_events { stage.handle_event(ev); }
/// let draw_list = stage.frame();
/// renderer.render(draw_list);
/// ```
pub struct Stage {
    pub scenes: SceneManager,
    pub settings: Settings,
    pub fonts: FontSystem,
    input: InputState,
    input_frame: InputFrame,
    draw_list: DrawList,
}

impl Stage {
    pub fn new(settings: Settings) -> Self {
        Self {
            scenes: SceneManager::new(),
            settings,
            fonts: FontSystem::new(),
            input: InputState::default(),
            input_frame: InputFrame::default(),
            draw_list: DrawList::new(),
        }
    }

    /// Loads a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.fonts.load_font(bytes)
    }

    /// Applies one platform event to the input state of the coming frame.
    pub fn handle_event(&mut self, ev: InputEvent) {
        self.input.apply_event(&mut self.input_frame, ev);
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Updates the active scene, then records its draw commands.
    ///
    /// Per-frame input transitions are consumed by the update. The returned
    /// list stays valid until the next call.
    #[must_use]
    pub fn frame(&mut self) -> &DrawList {
        // ── update ────────────────────────────────────────────────────────
        {
            let ctx = UpdateCtx::new(&self.input, &self.input_frame, &self.settings);
            self.scenes.update(&ctx);
        }
        self.input_frame.clear();

        // ── draw ──────────────────────────────────────────────────────────
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.fonts, &self.settings);
            self.scenes.draw(&mut painter);
        }
        &self.draw_list
    }

    /// The list recorded by the most recent [`frame`](Self::frame).
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
