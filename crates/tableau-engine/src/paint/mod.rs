//! Color model shared between the scene layer and renderers.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
