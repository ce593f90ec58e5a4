use std::any::Any;

use crate::context::UpdateCtx;
use crate::painter::Painter;
use crate::transform::Transform;

// ── AsAny ─────────────────────────────────────────────────────────────────

/// Downcasting support for boxed entities and widgets.
///
/// Implemented for every `'static` type; call it on `&dyn Entity` /
/// `&dyn Widget` (not on the `Box`) to reach the concrete type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── Entity ────────────────────────────────────────────────────────────────

/// Anything with a transform that updates and draws once per frame.
///
/// Scenes own entities as `Box<dyn Entity>` and draw them in world space.
///
/// # Implementing an entity
///
/// ```rust,ignore
/// struct Ship { transform: Transform, speed: f32 }
///
/// impl Entity for Ship {
///     fn transform(&self) -> &Transform { &self.transform }
///     fn transform_mut(&mut self) -> &mut Transform { &mut self.transform }
///     fn update(&mut self, ctx: &UpdateCtx<'_>) {
///         if ctx.key_down(Key::ArrowRight) { self.transform.position.x += self.speed; }
///     }
///     fn draw(&self, painter: &mut Painter<'_>) { /* ... */ }
/// }
/// ```
pub trait Entity: AsAny + 'static {
    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    /// Advances the entity by one frame.
    fn update(&mut self, ctx: &UpdateCtx<'_>);

    /// Records this entity's draw commands.
    fn draw(&self, painter: &mut Painter<'_>);
}
