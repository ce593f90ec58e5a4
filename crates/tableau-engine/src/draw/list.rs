use crate::coords::Camera2D;
use crate::paint::Color;

use super::DrawCmd;

/// Per-kind command counts for a recorded frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub rects: usize,
    pub texts: usize,
    pub textures: usize,
    pub world_passes: usize,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so a warmed list does not allocate per frame
///
/// # World pass
///
/// Use [`begin_world`] / [`end_world`] to bracket commands that a backend must
/// transform by the camera. Brackets do not nest.
///
/// ```ignore
/// draw_list.begin_world(camera);
/// // ... push entity commands ...
/// draw_list.end_world();
/// // ... screen-space overlay ...
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    /// Camera of the currently open world pass, if any.
    world: Option<Camera2D>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and any open world pass. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.world = None;
    }

    /// Returns items in submission (= paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn push_clear(&mut self, color: Color) {
        self.push(DrawCmd::Clear(color));
    }

    /// Opens the world-space pass.
    ///
    /// # Panics
    /// Panics (debug only) if a world pass is already open.
    pub fn begin_world(&mut self, camera: Camera2D) {
        debug_assert!(self.world.is_none(), "begin_world called inside an open world pass");
        self.world = Some(camera);
        self.push(DrawCmd::BeginWorld(camera));
    }

    /// Closes the world-space pass opened by [`begin_world`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `begin_world`.
    pub fn end_world(&mut self) {
        debug_assert!(self.world.is_some(), "end_world called without matching begin_world");
        self.world = None;
        self.push(DrawCmd::EndWorld);
    }

    /// Camera of the open world pass, or `None` when recording screen-space commands.
    #[inline]
    pub fn world_camera(&self) -> Option<Camera2D> {
        self.world
    }

    pub fn stats(&self) -> DrawStats {
        let mut stats = DrawStats::default();
        for cmd in &self.items {
            match cmd {
                DrawCmd::Rect(_) | DrawCmd::RectLines(_) => stats.rects += 1,
                DrawCmd::Text(_) => stats.texts += 1,
                DrawCmd::Texture(_) => stats.textures += 1,
                DrawCmd::BeginWorld(_) => stats.world_passes += 1,
                DrawCmd::Clear(_) | DrawCmd::EndWorld | DrawCmd::OutlineConfig(_) => {}
            }
        }
        stats
    }
}
