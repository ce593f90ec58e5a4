//! Coordinate and geometry types shared by the draw stream and the scene layer.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! World-space coordinates are mapped to the screen by a [`Camera2D`].

mod camera;
mod rect;
mod vec2;

pub use camera::Camera2D;
pub use rect::Rect;
pub use vec2::Vec2;
