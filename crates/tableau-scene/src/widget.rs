use crate::entity::Entity;
use crate::transform::Transform;

/// Lowest draw order; drawn first (background).
pub const MIN_DRAW_ORDER: i32 = -100;
/// Highest draw order; drawn last (foreground).
pub const MAX_DRAW_ORDER: i32 = 100;

/// Clamps `order` into `[MIN_DRAW_ORDER, MAX_DRAW_ORDER]`.
#[inline]
pub fn clamp_draw_order(order: i32) -> i32 {
    order.clamp(MIN_DRAW_ORDER, MAX_DRAW_ORDER)
}

// ── WidgetBase ────────────────────────────────────────────────────────────

/// State shared by every widget: transform, draw order and the two gates.
///
/// Fields are private so the draw-order range holds after every write.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBase {
    transform: Transform,
    draw_order: i32,
    /// Draw gate.
    active: bool,
    /// Update gate.
    enabled: bool,
}

impl WidgetBase {
    pub fn new(transform: Transform) -> Self {
        Self { transform, draw_order: 0, active: true, enabled: true }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new(Transform::default())
    }
}

// ── Widget ────────────────────────────────────────────────────────────────

/// A screen-space entity with a draw order and visibility/enabled gates.
///
/// Implementors only expose their [`WidgetBase`]; the gate and draw-order
/// methods are provided.
///
/// - `display_state` gates drawing, and a container also skips updating
///   hidden widgets.
/// - `is_enabled` is left to each widget's own `update`. [`Button`] honours
///   it and ignores input while disabled; the display widgets have nothing
///   to freeze, and [`VariableDisplay`] keeps refreshing its text.
///
/// [`Button`]: crate::widgets::button::Button
/// [`VariableDisplay`]: crate::widgets::variable_display::VariableDisplay
pub trait Widget: Entity {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Drawing priority. Higher values are drawn above lower ones.
    #[inline]
    fn draw_order(&self) -> i32 {
        self.base().draw_order
    }

    /// Sets the drawing priority, clamped into `[-100, 100]`.
    fn set_draw_order(&mut self, order: i32) {
        self.base_mut().draw_order = clamp_draw_order(order);
    }

    fn toggle_display_state(&mut self) {
        let base = self.base_mut();
        base.active = !base.active;
    }

    fn set_display_state(&mut self, active: bool) {
        self.base_mut().active = active;
    }

    /// `true` if the widget will be drawn on the next draw call.
    #[inline]
    fn display_state(&self) -> bool {
        self.base().active
    }

    fn enable(&mut self) {
        self.base_mut().enabled = true;
    }

    fn disable(&mut self) {
        self.base_mut().enabled = false;
    }

    fn toggle_enabled(&mut self) {
        let base = self.base_mut();
        base.enabled = !base.enabled;
    }

    /// `true` if the next update call runs the widget's update logic.
    #[inline]
    fn is_enabled(&self) -> bool {
        self.base().enabled
    }
}
