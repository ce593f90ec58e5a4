//! Tableau engine crate.
//!
//! Renderer-agnostic building blocks for the scene layer: geometry, colors,
//! the recorded draw stream, platform-agnostic input, text measurement,
//! textures and resource paths.

pub mod coords;
pub mod draw;
pub mod input;
pub mod logging;
pub mod paint;
pub mod resources;
pub mod text;
pub mod texture;
