//! Test doubles shared by the unit tests of this crate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tableau_engine::coords::{Rect, Vec2};
use tableau_engine::draw::DrawList;
use tableau_engine::input::{InputEvent, InputFrame, InputState, Key, KeyState, MouseButton, MouseButtonState};
use tableau_engine::paint::Color;
use tableau_engine::text::{FontId, TextMetrics};

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::settings::Settings;
use crate::transform::Transform;
use crate::widget::{Widget, WidgetBase};

// ── text metrics ──────────────────────────────────────────────────────────

/// Every glyph advances `size / 2`.
pub(crate) struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str, _font: Option<FontId>, size: f32, spacing: f32) -> Vec2 {
        let n = text.chars().count() as f32;
        let gaps = (n - 1.0).max(0.0);
        Vec2::new(n * size * 0.5 + gaps * spacing, size)
    }
}

/// Runs `f` against a fresh painter and returns what it recorded.
pub(crate) fn record(f: impl FnOnce(&mut Painter<'_>)) -> DrawList {
    let settings = Settings::default();
    let mut list = DrawList::new();
    {
        let mut painter = Painter::new(&mut list, &FixedMetrics, &settings);
        f(&mut painter);
    }
    list
}

// ── input ─────────────────────────────────────────────────────────────────

/// Scripted input for driving `update` calls.
#[derive(Default)]
pub(crate) struct Input {
    pub state: InputState,
    pub frame: InputFrame,
    pub settings: Settings,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctx(&self) -> UpdateCtx<'_> {
        UpdateCtx::new(&self.state, &self.frame, &self.settings)
    }

    /// Forgets this frame's transitions; held state is kept.
    pub fn next_frame(&mut self) {
        self.frame.clear();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.state.apply_event(&mut self.frame, InputEvent::pointer_moved(x, y));
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.state.apply_event(
            &mut self.frame,
            InputEvent::pointer_button(MouseButton::Left, MouseButtonState::Pressed, x, y),
        );
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.state.apply_event(
            &mut self.frame,
            InputEvent::pointer_button(MouseButton::Left, MouseButtonState::Released, x, y),
        );
    }

    pub fn key(&mut self, key: Key, state: KeyState) {
        self.state.apply_event(&mut self.frame, InputEvent::Key { key, state });
    }
}

// ── trackers ──────────────────────────────────────────────────────────────

/// Shared counters a [`Tracker`] reports into.
#[derive(Clone, Default)]
pub(crate) struct Tally {
    updates: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
    trace: Rc<RefCell<Vec<String>>>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> usize {
        self.updates.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Names of the trackers drawn so far, in draw order.
    pub fn trace(&self) -> Vec<String> {
        self.trace.borrow().clone()
    }
}

/// A widget (and entity) that counts its updates and drops and logs its draws.
///
/// Each draw also records a 1×1 rect so draw-list ordering can be checked.
pub(crate) struct Tracker {
    base: WidgetBase,
    name: String,
    tally: Tally,
}

impl Tracker {
    pub fn new(name: &str, tally: &Tally) -> Self {
        Self { base: WidgetBase::default(), name: name.to_owned(), tally: tally.clone() }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.set_draw_order(order);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Tracker {
    fn transform(&self) -> &Transform {
        self.base.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.base.transform_mut()
    }

    fn update(&mut self, _ctx: &UpdateCtx<'_>) {
        self.tally.updates.set(self.tally.updates.get() + 1);
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        self.tally.trace.borrow_mut().push(self.name.clone());
        painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    }
}

impl Widget for Tracker {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.tally.drops.set(self.tally.drops.get() + 1);
    }
}
