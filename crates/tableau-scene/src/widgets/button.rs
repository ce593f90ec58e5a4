use tableau_engine::coords::{Rect, Vec2};
use tableau_engine::draw::{OutlineParams, TextureCmd};
use tableau_engine::input::MouseButton;
use tableau_engine::paint::Color;
use tableau_engine::texture::{Texture, MAX_PADDING};

use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::painter::Painter;
use crate::transform::Transform;
use crate::widget::{Widget, WidgetBase};

/// Transparent pixels added around a button texture so the outline has room.
pub const DEFAULT_CANVAS_MARGIN: u32 = 4;

/// Interaction state of a [`Button`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Pointer is over the hitbox.
    Hover,
    /// Left button went down over the hitbox and is still held.
    Pressed,
}

/// A textured button centered on its position.
///
/// Hovering outlines the texture; pressing darkens it. The release callback
/// fires when the left button is let go while the pointer is still over the
/// hitbox. Leaving the hitbox cancels a press.
///
/// # Example
/// ```rust,ignore
/// Button::new(texture, Transform::at(Vec2::new(400.0, 300.0)))
///     .on_release(move || requests.borrow_mut().push_back("game"))
/// ```
pub struct Button {
    base: WidgetBase,
    /// Source texture padded by `margin` on every side.
    texture: Texture,
    margin: u32,
    hitbox: Rect,
    state: ButtonState,
    released: bool,
    on_release: Box<dyn FnMut()>,
}

impl Button {
    pub fn new(texture: Texture, transform: Transform) -> Self {
        Self::with_margin(texture, transform, DEFAULT_CANVAS_MARGIN)
    }

    /// Like [`new`](Self::new) with a custom canvas margin, capped at
    /// [`MAX_PADDING`].
    pub fn with_margin(texture: Texture, transform: Transform, margin: u32) -> Self {
        let margin = margin.min(MAX_PADDING);
        let mut button = Self {
            base: WidgetBase::new(transform),
            texture: texture.clone(),
            margin,
            hitbox: Rect::default(),
            state: ButtonState::Idle,
            released: false,
            on_release: Box::new(|| log::info!("button released without a callback")),
        };
        button.setup_texture(&texture);
        button
    }

    /// Callback invoked on release over the hitbox.
    pub fn on_release(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_release = Box::new(f);
        self
    }

    pub fn set_on_release(&mut self, f: impl FnMut() + 'static) {
        self.on_release = Box::new(f);
    }

    /// Replaces the texture and recomputes the hitbox from the current transform.
    pub fn set_texture(&mut self, texture: &Texture) {
        self.setup_texture(texture);
        log::debug!("button texture replaced ({}x{})", texture.width(), texture.height());
    }

    /// Recomputes the hitbox after the transform changed.
    pub fn refresh_hitbox(&mut self) {
        let unpadded = self.texture.size() - Vec2::splat(2.0 * self.margin as f32);
        self.hitbox = Self::hitbox_for(self.base.transform(), unpadded);
    }

    fn setup_texture(&mut self, source: &Texture) {
        self.hitbox = Self::hitbox_for(self.base.transform(), source.size());
        self.texture = source.padded(self.margin);
    }

    fn hitbox_for(transform: &Transform, size: Vec2) -> Rect {
        Rect::from_center_size(transform.position, size * transform.scale)
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    #[inline]
    pub fn is_hover(&self) -> bool {
        self.state != ButtonState::Idle
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    /// `true` only for the update in which the callback fired.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    /// The padded texture that is drawn.
    #[inline]
    pub fn texture(&self) -> &Texture {
        &self.texture
    }
}

impl Entity for Button {
    fn transform(&self) -> &Transform {
        self.base.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.base.transform_mut()
    }

    fn update(&mut self, ctx: &UpdateCtx<'_>) {
        self.released = false;
        if !self.is_enabled() {
            self.state = ButtonState::Idle;
            return;
        }

        let hover = ctx.pointer_pos().is_some_and(|p| self.hitbox.contains(p));
        let mut fire = false;
        self.state = match self.state {
            _ if !hover => ButtonState::Idle,
            // Only a release seen this frame clicks; a press held across
            // frames this button never saw is dropped.
            ButtonState::Pressed if ctx.button_released(MouseButton::Left) => {
                fire = true;
                ButtonState::Idle
            }
            ButtonState::Pressed if !ctx.button_down(MouseButton::Left) => ButtonState::Idle,
            ButtonState::Pressed => ButtonState::Pressed,
            _ if ctx.button_pressed(MouseButton::Left) && ctx.button_released(MouseButton::Left) => {
                fire = !ctx.button_down(MouseButton::Left);
                if fire { ButtonState::Idle } else { ButtonState::Pressed }
            }
            _ if ctx.button_pressed(MouseButton::Left) => ButtonState::Pressed,
            _ => ButtonState::Hover,
        };

        if fire {
            self.released = true;
            (self.on_release)();
        }
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let settings = painter.settings;
        let t = self.base.transform();
        let size = self.texture.size() * t.scale;
        let shade = if self.is_pressed() { 0.0 } else { 1.0 };

        painter.configure_outline(OutlineParams {
            enabled: self.is_hover(),
            thickness: t.scale * settings.outline_scale,
            color: settings.outline_color,
            texture_size: size,
            tint: Color::from_straight(shade, shade, shade, settings.highlight_strength),
        });

        let mut cmd = TextureCmd::scaled(self.texture.clone(), t.position - size / 2.0, t.rotation, t.scale);
        cmd.outlined = self.is_hover();
        painter.texture(cmd);
    }
}

impl Widget for Button {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use tableau_engine::draw::DrawCmd;

    use super::*;
    use crate::testing::{record, Input};

    /// 20×10 button centered on (100, 100): hitbox is (90..110, 95..105).
    fn button(clicks: &Rc<Cell<u32>>) -> Button {
        let c = clicks.clone();
        Button::new(Texture::solid(20, 10, [255, 255, 255, 255]), Transform::at(Vec2::new(100.0, 100.0)))
            .on_release(move || c.set(c.get() + 1))
    }

    fn step(b: &mut Button, input: &mut Input) {
        b.update(&input.ctx());
        input.next_frame();
    }

    // ── setup ─────────────────────────────────────────────────────────────

    #[test]
    fn texture_is_padded_and_hitbox_uses_source_size() {
        let b = button(&Rc::new(Cell::new(0)));
        assert_eq!((b.texture().width(), b.texture().height()), (28, 18));
        assert_eq!(b.hitbox(), Rect::new(90.0, 95.0, 20.0, 10.0));
    }

    #[test]
    fn hitbox_scales_with_transform() {
        let tex = Texture::solid(20, 10, [0, 0, 0, 255]);
        let b = Button::with_margin(tex, Transform::at(Vec2::new(0.0, 0.0)).with_scale(2.0), 1);
        assert_eq!(b.hitbox(), Rect::new(-20.0, -10.0, 40.0, 20.0));
        assert_eq!(b.texture().width(), 22);
    }

    #[test]
    fn huge_margin_is_capped_and_hitbox_survives_refresh() {
        let tex = Texture::solid(20, 10, [0, 0, 0, 255]);
        let mut b = Button::with_margin(tex, Transform::at(Vec2::new(0.0, 0.0)), u32::MAX);
        assert_eq!(b.texture().width(), 20 + 2 * MAX_PADDING);
        b.refresh_hitbox();
        assert_eq!(b.hitbox(), Rect::new(-10.0, -5.0, 20.0, 10.0));
    }

    #[test]
    fn refresh_hitbox_follows_moved_transform() {
        let mut b = button(&Rc::new(Cell::new(0)));
        b.transform_mut().position = Vec2::new(0.0, 0.0);
        b.refresh_hitbox();
        assert_eq!(b.hitbox(), Rect::new(-10.0, -5.0, 20.0, 10.0));
    }

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn click_inside_fires_once() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        let mut input = Input::new();

        input.move_to(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Hover);

        input.press(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Pressed);

        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Pressed, "held button stays pressed");

        input.release(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 1);
        assert_eq!(b.state(), ButtonState::Idle);
        assert!(b.is_released());

        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 1);
        assert!(!b.is_released());
        assert_eq!(b.state(), ButtonState::Hover);
    }

    #[test]
    fn leaving_hitbox_cancels_press() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        let mut input = Input::new();

        input.press(100.0, 100.0);
        step(&mut b, &mut input);
        assert!(b.is_pressed());

        input.move_to(300.0, 300.0);
        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Idle);

        input.move_to(100.0, 100.0);
        input.release(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn release_outside_in_same_frame_does_not_fire() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        let mut input = Input::new();

        input.press(100.0, 100.0);
        step(&mut b, &mut input);
        input.release(500.0, 500.0);
        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 0);
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn press_outside_then_enter_does_not_press() {
        let mut b = button(&Rc::new(Cell::new(0)));
        let mut input = Input::new();

        input.press(0.0, 0.0);
        step(&mut b, &mut input);
        input.move_to(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Hover);
    }

    #[test]
    fn disabled_button_ignores_input() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        b.disable();
        let mut input = Input::new();

        input.press(100.0, 100.0);
        step(&mut b, &mut input);
        input.release(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 0);
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn press_and_release_in_one_frame_fires() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        let mut input = Input::new();

        input.move_to(100.0, 100.0);
        step(&mut b, &mut input);
        input.press(100.0, 100.0);
        input.release(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 1);
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn release_while_disabled_is_not_replayed() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        let mut input = Input::new();

        input.move_to(100.0, 100.0);
        input.press(100.0, 100.0);
        step(&mut b, &mut input);
        assert!(b.is_pressed());

        b.disable();
        input.release(100.0, 100.0);
        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Idle);
        for _ in 0..10 {
            step(&mut b, &mut input);
        }

        b.enable();
        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 0);
        assert_eq!(b.state(), ButtonState::Hover);
    }

    #[test]
    fn release_in_a_frame_without_update_does_not_fire() {
        let clicks = Rc::new(Cell::new(0));
        let mut b = button(&clicks);
        let mut input = Input::new();

        input.move_to(100.0, 100.0);
        input.press(100.0, 100.0);
        step(&mut b, &mut input);
        assert!(b.is_pressed());

        // Frames where the owning scene is inactive: input moves on, the
        // button is not updated.
        input.release(100.0, 100.0);
        for _ in 0..50 {
            input.next_frame();
        }

        step(&mut b, &mut input);
        assert_eq!(clicks.get(), 0);
        assert!(!b.is_released());
        assert_eq!(b.state(), ButtonState::Idle);

        step(&mut b, &mut input);
        assert_eq!(b.state(), ButtonState::Hover);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_configures_outline_then_texture() {
        let mut b = button(&Rc::new(Cell::new(0)));
        let mut input = Input::new();
        input.move_to(100.0, 100.0);
        step(&mut b, &mut input);

        let list = record(|p| b.draw(p));
        let DrawCmd::OutlineConfig(outline) = &list.items()[0] else { panic!("expected outline config") };
        assert!(outline.enabled);
        assert_eq!(outline.thickness, 0.75);
        assert_eq!(outline.texture_size, Vec2::new(28.0, 18.0));
        assert_eq!(outline.tint, Color::from_straight(1.0, 1.0, 1.0, 0.15));

        let DrawCmd::Texture(tex) = &list.items()[1] else { panic!("expected texture") };
        assert!(tex.outlined);
        assert_eq!(tex.dest, Rect::new(86.0, 91.0, 28.0, 18.0));
    }

    #[test]
    fn pressed_button_tints_black() {
        let mut b = button(&Rc::new(Cell::new(0)));
        let mut input = Input::new();
        input.press(100.0, 100.0);
        step(&mut b, &mut input);

        let list = record(|p| b.draw(p));
        let DrawCmd::OutlineConfig(outline) = &list.items()[0] else { panic!("expected outline config") };
        assert_eq!(outline.tint, Color::from_straight(0.0, 0.0, 0.0, 0.15));
    }
}
