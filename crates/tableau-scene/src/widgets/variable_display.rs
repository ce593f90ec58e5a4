use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::rc::Rc;

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::transform::Transform;
use crate::widget::{Widget, WidgetBase};

use super::label::Label;

type Source = Box<dyn Fn() -> Option<String>>;

/// A label whose text mirrors a value owned elsewhere.
///
/// The value is re-read and stringified on every update. The display only
/// holds a shared handle, so the owner keeps mutating the value freely.
///
/// ```rust,ignore
/// let score = Rc::new(Cell::new(0u32));
/// let display = VariableDisplay::watch(score.clone(), Transform::at(Vec2::new(20.0, 20.0)));
/// score.set(10); // shown after the next update
/// ```
pub struct VariableDisplay {
    label: Label,
    source: Source,
}

impl VariableDisplay {
    /// Displays whatever `source` returns.
    pub fn new(source: impl Fn() -> String + 'static, transform: Transform) -> Self {
        Self::from_source(Box::new(move || Some(source())), transform)
    }

    /// Displays a `Copy` value shared through a `Cell`.
    pub fn watch<T>(value: Rc<Cell<T>>, transform: Transform) -> Self
    where
        T: Copy + Display + 'static,
    {
        Self::from_source(Box::new(move || Some(value.get().to_string())), transform)
    }

    /// Displays a value shared through a `RefCell`.
    ///
    /// While the value is mutably borrowed the previous text is kept.
    pub fn watch_ref<T>(value: Rc<RefCell<T>>, transform: Transform) -> Self
    where
        T: Display + 'static,
    {
        Self::from_source(
            Box::new(move || value.try_borrow().ok().map(|v| v.to_string())),
            transform,
        )
    }

    fn from_source(source: Source, transform: Transform) -> Self {
        let text = source().unwrap_or_default();
        Self { label: Label::new(text, transform), source }
    }

    /// Applies `f` to the inner label; used to style the text.
    pub fn styled(mut self, f: impl FnOnce(Label) -> Label) -> Self {
        self.label = f(self.label);
        self
    }

    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[inline]
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Re-reads the value now instead of waiting for the next update.
    pub fn refresh(&mut self) {
        if let Some(text) = (self.source)() {
            self.label.set_text(text);
        }
    }
}

impl Entity for VariableDisplay {
    fn transform(&self) -> &Transform {
        self.label.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.label.transform_mut()
    }

    fn update(&mut self, _ctx: &UpdateCtx<'_>) {
        self.refresh();
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        self.label.draw(painter);
    }
}

impl Widget for VariableDisplay {
    fn base(&self) -> &WidgetBase {
        self.label.base()
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        self.label.base_mut()
    }
}

#[cfg(test)]
mod tests {
    use tableau_engine::paint::Color;

    use super::*;
    use crate::testing::Input;

    #[test]
    fn watch_tracks_cell_on_update() {
        let score = Rc::new(Cell::new(0u32));
        let mut display = VariableDisplay::watch(score.clone(), Transform::default());
        assert_eq!(display.label().text(), "0");

        score.set(10);
        assert_eq!(display.label().text(), "0");

        let input = Input::new();
        display.update(&input.ctx());
        assert_eq!(display.label().text(), "10");
    }

    #[test]
    fn watch_ref_keeps_text_while_borrowed() {
        let name = Rc::new(RefCell::new(String::from("ada")));
        let mut display = VariableDisplay::watch_ref(name.clone(), Transform::default());
        let input = Input::new();

        let guard = name.borrow_mut();
        display.update(&input.ctx());
        assert_eq!(display.label().text(), "ada");
        drop(guard);

        name.borrow_mut().push_str("!");
        display.update(&input.ctx());
        assert_eq!(display.label().text(), "ada!");
    }

    #[test]
    fn closure_source_and_styling() {
        let hits = Rc::new(Cell::new(3));
        let h = hits.clone();
        let mut display = VariableDisplay::new(move || format!("hits: {}", h.get()), Transform::default())
            .styled(|l| l.size(32.0).color(Color::WHITE));
        hits.set(4);
        display.refresh();
        assert_eq!(display.label().text(), "hits: 4");
        assert_eq!(display.label().text_size(), 32.0);
    }

    #[test]
    fn gates_live_on_the_inner_label() {
        let mut display = VariableDisplay::new(String::new, Transform::default());
        display.set_draw_order(7);
        display.disable();
        assert_eq!(display.label().draw_order(), 7);
        assert!(!display.label().is_enabled());
    }

    #[test]
    fn disabled_display_still_refreshes() {
        let score = Rc::new(Cell::new(1u32));
        let mut display = VariableDisplay::watch(score.clone(), Transform::default());
        display.disable();

        score.set(2);
        display.update(&Input::new().ctx());
        assert_eq!(display.label().text(), "2");
    }
}
