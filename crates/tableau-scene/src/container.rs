use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::context::UpdateCtx;
use crate::error::{Collection, SceneError};
use crate::painter::Painter;
use crate::widget::{clamp_draw_order, Widget};

/// An owning, id-keyed group of widgets drawn as one screen-space layer.
///
/// Widgets are drawn in ascending draw order; ties are broken by ascending
/// id. Hidden widgets are neither drawn nor updated.
#[derive(Default)]
pub struct WidgetContainer {
    elements: BTreeMap<String, Box<dyn Widget>>,
    draw_order: i32,
}

impl WidgetContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty container with the given draw order (clamped into `[-100, 100]`).
    pub fn with_draw_order(order: i32) -> Self {
        Self { elements: BTreeMap::new(), draw_order: clamp_draw_order(order) }
    }

    // ── ownership ─────────────────────────────────────────────────────────

    /// Takes ownership of `widget` under `id`.
    ///
    /// An `id` already in use is rejected with [`SceneError::DuplicateId`];
    /// the stored widget is kept and `widget` is dropped.
    pub fn add_element(&mut self, id: impl Into<String>, widget: impl Widget) -> Result<(), SceneError> {
        self.add_boxed_element(id, Box::new(widget))
    }

    /// Like [`add_element`](Self::add_element) for an already boxed widget.
    pub fn add_boxed_element(
        &mut self,
        id: impl Into<String>,
        widget: Box<dyn Widget>,
    ) -> Result<(), SceneError> {
        insert_unique(&mut self.elements, Collection::Element, id.into(), widget)
    }

    /// Stores `widget` under `id`, returning the widget it displaced.
    pub fn replace_element(&mut self, id: impl Into<String>, widget: impl Widget) -> Option<Box<dyn Widget>> {
        self.elements.insert(id.into(), Box::new(widget))
    }

    /// Removes and returns the widget under `id`. A missing id is a no-op.
    pub fn remove_element(&mut self, id: &str) -> Option<Box<dyn Widget>> {
        let removed = self.elements.remove(id);
        if removed.is_some() {
            log::debug!("removed UI element `{id}`");
        }
        removed
    }

    // ── lookup ────────────────────────────────────────────────────────────

    pub fn get_element(&self, id: &str) -> Result<&dyn Widget, SceneError> {
        self.elements
            .get(id)
            .map(|w| &**w)
            .ok_or_else(|| SceneError::not_found(Collection::Element, id))
    }

    pub fn get_element_mut(&mut self, id: &str) -> Result<&mut dyn Widget, SceneError> {
        let widget: &mut dyn Widget = &mut **self
            .elements
            .get_mut(id)
            .ok_or_else(|| SceneError::not_found(Collection::Element, id))?;
        Ok(widget)
    }

    /// Looks up `id` and downcasts it to the concrete widget type `T`.
    pub fn get_element_as<T: Widget>(&self, id: &str) -> Result<&T, SceneError> {
        self.get_element(id)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| SceneError::type_mismatch::<T>(Collection::Element, id))
    }

    pub fn get_element_as_mut<T: Widget>(&mut self, id: &str) -> Result<&mut T, SceneError> {
        self.get_element_mut(id)?
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| SceneError::type_mismatch::<T>(Collection::Element, id))
    }

    #[inline]
    pub fn contains_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    // ── draw order ────────────────────────────────────────────────────────

    #[inline]
    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    pub fn set_draw_order(&mut self, order: i32) {
        self.draw_order = clamp_draw_order(order);
    }

    // ── bulk gates ────────────────────────────────────────────────────────

    pub fn enable_all(&mut self) {
        self.elements.values_mut().for_each(|w| w.enable());
    }

    pub fn disable_all(&mut self) {
        self.elements.values_mut().for_each(|w| w.disable());
    }

    pub fn set_all_visibility_to(&mut self, visible: bool) {
        self.elements.values_mut().for_each(|w| w.set_display_state(visible));
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Updates every visible widget. The enabled flag is left to each widget.
    pub fn update(&mut self, ctx: &UpdateCtx<'_>) {
        for widget in self.elements.values_mut() {
            if widget.display_state() {
                widget.update(ctx);
            }
        }
    }

    /// Draws visible widgets from lowest to highest draw order.
    pub fn draw(&self, painter: &mut Painter<'_>) {
        let mut visible: Vec<&dyn Widget> =
            self.elements.values().map(|w| &**w).filter(|w| w.display_state()).collect();
        // Stable: equal orders keep ascending id order.
        visible.sort_by_key(|w| w.draw_order());
        for widget in visible {
            widget.draw(painter);
        }
    }
}

/// Inserts `value` under `id` unless the id is taken; a rejected value is dropped.
pub(crate) fn insert_unique<V>(
    map: &mut BTreeMap<String, V>,
    kind: Collection,
    id: String,
    value: V,
) -> Result<(), SceneError> {
    match map.entry(id) {
        Entry::Occupied(e) => {
            log::warn!("rejected {kind} `{}`: id already in use", e.key());
            Err(SceneError::duplicate(kind, e.key()))
        }
        Entry::Vacant(e) => {
            log::debug!("added {kind} `{}`", e.key());
            e.insert(value);
            Ok(())
        }
    }
}
