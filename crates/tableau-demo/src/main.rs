//! Headless tableau demo.
//!
//! Builds a menu scene and a game scene in code, then drives them with a
//! scripted input stream the way a windowed host would feed platform events.
//! Run with `RUST_LOG=debug` to follow scene switches and button callbacks,
//! or `RUST_LOG=trace` for per-frame draw statistics.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use tableau_engine::input::{InputEvent, KeyState, MouseButtonState};
use tableau_engine::logging::{init_logging, LoggingConfig};
use tableau_engine::resources::ResourcePaths;
use tableau_scene::prelude::*;

/// Scene ids requested by button callbacks, applied by the host between frames.
type Requests = Rc<RefCell<VecDeque<&'static str>>>;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
const PLAY_POS: Vec2 = Vec2::new(400.0, 260.0);
const QUIT_POS: Vec2 = Vec2::new(400.0, 340.0);

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut stage = Stage::new(Settings::default());
    let font = match load_font() {
        Some(bytes) => Some(stage.load_font(&bytes).context("loading UI font")?),
        None => {
            log::warn!("no system font found; text is measured with fallback metrics");
            None
        }
    };

    let paths = ResourcePaths::from_current_dir();
    let requests: Requests = Rc::default();
    let score = Rc::new(Cell::new(0u32));

    stage.scenes.add_scene("menu", build_menu(&paths, font, &requests))?;
    stage.scenes.add_scene("game", build_game(&paths, font, &score))?;
    stage.scenes.load_scene("menu")?;

    let mut frames = 0usize;
    'frames: for events in script() {
        for ev in events {
            stage.handle_event(ev);
        }

        let stats = stage.frame().stats();
        frames += 1;
        log::trace!(
            "frame {frames} [{}]: {} rects, {} texts, {} textures",
            stage.scenes.active_scene_id(),
            stats.rects,
            stats.texts,
            stats.textures,
        );

        if stage.scenes.active_scene_id() == "game" {
            score.set(score.get() + 10);
            if stage.input().key_down(Key::Escape) {
                requests.borrow_mut().push_back("menu");
            }
        }

        let pending: Vec<&str> = requests.borrow_mut().drain(..).collect();
        for request in pending {
            if request == "quit" {
                log::info!("quit requested after {frames} frames");
                break 'frames;
            }
            // Unknown ids fall back to the default scene; keep running.
            if let Err(err) = stage.scenes.load_scene(request) {
                log::warn!("{err}");
            }
        }
    }

    let game = stage.scenes.scene("game")?;
    let ship = game.get_entity_as::<Ship>("ship")?;
    log::info!(
        "ran {frames} frames; final score {}, ship at ({:.0}, {:.0})",
        score.get(),
        ship.transform().position.x,
        ship.transform().position.y,
    );
    Ok(())
}

// ── scenes ────────────────────────────────────────────────────────────────

fn build_menu(paths: &ResourcePaths, font: Option<FontId>, requests: &Requests) -> Scene {
    let mut background = WidgetContainer::with_draw_order(-10);
    add(
        &mut background,
        "panel",
        Panel::new(Transform::at(Vec2::new(250.0, 120.0)), Vec2::new(300.0, 300.0))
            .color(Color::from_srgb_u8(30, 30, 46, 255))
            .edge(Color::from_srgb_u8(137, 180, 250, 255), 2),
    );
    add(
        &mut background,
        "title",
        with_font(
            Label::new("TABLEAU", Transform::at(Vec2::new(400.0, 170.0)))
                .size(40.0)
                .color(Color::WHITE)
                .alignment(Alignment::Middle),
            font,
        ),
    );

    let mut buttons = WidgetContainer::new();
    let play = requests.clone();
    add(
        &mut buttons,
        "play",
        Button::new(texture_or(paths, "button_play", [88, 166, 92, 255]), Transform::at(PLAY_POS))
            .on_release(move || play.borrow_mut().push_back("game")),
    );
    let quit = requests.clone();
    add(
        &mut buttons,
        "quit",
        Button::new(texture_or(paths, "button_quit", [191, 64, 64, 255]), Transform::at(QUIT_POS))
            .on_release(move || quit.borrow_mut().push_back("quit")),
    );

    let mut scene = Scene::new();
    scene.set_background(Color::from_srgb_u8(17, 17, 27, 255));
    attach(&mut scene, "background", background);
    attach(&mut scene, "buttons", buttons);
    scene
}

fn build_game(paths: &ResourcePaths, font: Option<FontId>, score: &Rc<Cell<u32>>) -> Scene {
    let mut scene = Scene::new();
    scene.set_camera(Camera2D::centered_on(Vec2::new(400.0, 300.0), VIEWPORT));

    let ship = Ship::new(texture_or(paths, "ship", [240, 240, 240, 255]), Vec2::new(400.0, 300.0));
    if let Err(err) = scene.add_entity("ship", ship) {
        log::error!("{err}");
    }
    let beacon = Sprite::new(texture_or(paths, "beacon", [250, 179, 135, 255]), Transform::at(Vec2::new(600.0, 200.0)))
        .tint(Color::from_srgb_u8(255, 220, 180, 255));
    if let Err(err) = scene.add_entity("beacon", beacon) {
        log::error!("{err}");
    }

    let mut hud = WidgetContainer::with_draw_order(50);
    add(
        &mut hud,
        "score",
        VariableDisplay::watch(score.clone(), Transform::at(Vec2::new(780.0, 24.0)))
            .styled(|l| with_font(l.size(24.0).color(Color::WHITE).alignment(Alignment::Right), font)),
    );
    add(
        &mut hud,
        "icon",
        ImageDisplay::new(texture_or(paths, "icon", [137, 180, 250, 255]), Transform::at(Vec2::new(20.0, 24.0)).with_scale(0.5))
            .origin(Vec2::new(0.0, 8.0)),
    );
    attach(&mut scene, "hud", hud);
    scene
}

fn add(container: &mut WidgetContainer, id: &str, widget: impl Widget) {
    if let Err(err) = container.add_element(id, widget) {
        log::error!("{err}");
    }
}

fn attach(scene: &mut Scene, id: &str, container: WidgetContainer) {
    if let Err(err) = scene.add_ui_container(id, container) {
        log::error!("{err}");
    }
}

fn with_font(label: Label, font: Option<FontId>) -> Label {
    match font {
        Some(font) => label.font(font),
        None => label,
    }
}

// ── entities ──────────────────────────────────────────────────────────────

/// Player ship steered with the arrow keys.
struct Ship {
    sprite: Sprite,
    speed: f32,
}

impl Ship {
    fn new(texture: Texture, position: Vec2) -> Self {
        Self { sprite: Sprite::new(texture, Transform::at(position)), speed: 4.0 }
    }
}

impl Entity for Ship {
    fn transform(&self) -> &Transform {
        self.sprite.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.sprite.transform_mut()
    }

    fn update(&mut self, ctx: &UpdateCtx<'_>) {
        let mut dir = Vec2::zero();
        if ctx.key_down(Key::ArrowLeft) || ctx.key_down(Key::A) {
            dir.x -= 1.0;
        }
        if ctx.key_down(Key::ArrowRight) || ctx.key_down(Key::D) {
            dir.x += 1.0;
        }
        if ctx.key_down(Key::ArrowUp) || ctx.key_down(Key::W) {
            dir.y -= 1.0;
        }
        if ctx.key_down(Key::ArrowDown) || ctx.key_down(Key::S) {
            dir.y += 1.0;
        }
        let t = self.sprite.transform_mut();
        t.position = t.position + dir * self.speed;
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        self.sprite.draw(painter);
    }
}

// ── resources ─────────────────────────────────────────────────────────────

/// Loads `<textures>/<name>.png`, or generates a framed placeholder.
fn texture_or(paths: &ResourcePaths, name: &str, rgba: [u8; 4]) -> Texture {
    let path = paths.texture(name);
    match Texture::load(&path) {
        Ok(texture) => texture,
        Err(err) => {
            log::debug!("{err}; using a generated placeholder");
            placeholder(160, 48, rgba)
        }
    }
}

fn placeholder(width: u32, height: u32, rgba: [u8; 4]) -> Texture {
    let [r, g, b, a] = rgba;
    let frame = Rgba([r / 2, g / 2, b / 2, a]);
    let image = RgbaImage::from_fn(width, height, |x, y| {
        if x < 2 || y < 2 || x >= width - 2 || y >= height - 2 { frame } else { Rgba(rgba) }
    });
    Texture::from_image(image)
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

// ── script ────────────────────────────────────────────────────────────────

/// Input events delivered before each frame.
fn script() -> Vec<Vec<InputEvent>> {
    let key = |key, state| InputEvent::Key { key, state };
    let button = |state, at: Vec2| InputEvent::pointer_button(MouseButton::Left, state, at.x, at.y);

    vec![
        // Menu: hover and click "Play".
        vec![InputEvent::pointer_moved(PLAY_POS.x, PLAY_POS.y)],
        vec![button(MouseButtonState::Pressed, PLAY_POS)],
        vec![button(MouseButtonState::Released, PLAY_POS)],
        // Game: fly right, then up.
        vec![key(Key::ArrowRight, KeyState::Pressed)],
        vec![],
        vec![],
        vec![key(Key::ArrowRight, KeyState::Released), key(Key::ArrowUp, KeyState::Pressed)],
        vec![],
        vec![key(Key::ArrowUp, KeyState::Released)],
        // Back to the menu.
        vec![key(Key::Escape, KeyState::Pressed)],
        vec![key(Key::Escape, KeyState::Released), InputEvent::pointer_moved(QUIT_POS.x, QUIT_POS.y)],
        // Drag from "Quit" off the button: the press is cancelled.
        vec![button(MouseButtonState::Pressed, QUIT_POS)],
        vec![button(MouseButtonState::Released, Vec2::new(10.0, 10.0))],
        // Click "Quit" properly.
        vec![InputEvent::pointer_moved(QUIT_POS.x, QUIT_POS.y)],
        vec![button(MouseButtonState::Pressed, QUIT_POS)],
        vec![button(MouseButtonState::Released, QUIT_POS)],
        vec![],
    ]
}
