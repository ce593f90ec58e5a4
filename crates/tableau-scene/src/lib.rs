//! Tableau scene: entities, widgets and scenes on top of `tableau-engine`.
//!
//! A [`SceneManager`] owns [`Scene`]s and forwards each frame to the active
//! one. A scene owns world-space [`Entity`]s and screen-space
//! [`WidgetContainer`]s; every frame it updates all of them and then records
//! draw commands: the entities inside the camera's world pass, then the UI
//! layers in ascending draw order.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tableau_scene::prelude::*;
//!
//! let mut hud = WidgetContainer::new();
//! hud.add_element("title", Label::new("Hello", Transform::at(Vec2::new(20.0, 20.0))))?;
//!
//! let mut scene = Scene::new();
//! scene.add_ui_container("hud", hud)?;
//!
//! let mut stage = Stage::default();
//! stage.scenes.add_scene("main", scene)?;
//! stage.scenes.load_scene("main")?;
//!
//! // Once per host frame:
//! let draw_list = stage.frame();
//! ```
//!
//! # Custom entities
//!
//! Implement [`Entity`] for game objects; implement [`Widget`] as well (by
//! exposing a [`WidgetBase`]) to place a type inside a `WidgetContainer`.

pub mod container;
pub mod context;
pub mod entity;
pub mod error;
pub mod manager;
pub mod painter;
pub mod scene;
pub mod settings;
pub mod sprite;
pub mod stage;
pub mod transform;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use container::WidgetContainer;
pub use context::UpdateCtx;
pub use entity::{AsAny, Entity};
pub use error::{Collection, SceneError};
pub use manager::{MissingScenePolicy, SceneManager, DEFAULT_SCENE_ID};
pub use painter::Painter;
pub use scene::Scene;
pub use settings::Settings;
pub use sprite::Sprite;
pub use stage::Stage;
pub use transform::Transform;
pub use widget::{Widget, WidgetBase, MAX_DRAW_ORDER, MIN_DRAW_ORDER};

/// Everything needed to build scenes and write entities and widgets.
pub mod prelude {
    pub use crate::container::WidgetContainer;
    pub use crate::context::UpdateCtx;
    pub use crate::entity::Entity;
    pub use crate::error::SceneError;
    pub use crate::manager::{MissingScenePolicy, SceneManager, DEFAULT_SCENE_ID};
    pub use crate::painter::Painter;
    pub use crate::scene::Scene;
    pub use crate::settings::Settings;
    pub use crate::sprite::Sprite;
    pub use crate::stage::Stage;
    pub use crate::transform::Transform;
    pub use crate::widget::{Widget, WidgetBase};
    pub use crate::widgets::{
        button::{Button, ButtonState},
        image_display::ImageDisplay,
        label::{Alignment, Label},
        panel::Panel,
        variable_display::VariableDisplay,
    };

    // Engine primitives everyone needs.
    pub use tableau_engine::coords::{Camera2D, Rect, Vec2};
    pub use tableau_engine::input::{Key, MouseButton};
    pub use tableau_engine::paint::Color;
    pub use tableau_engine::text::FontId;
    pub use tableau_engine::texture::Texture;
}
