//! CPU-side textures.
//!
//! A [`Texture`] is a cheap, clonable handle to immutable RGBA pixels. The
//! pixels are released when the last handle drops; draw commands hold clones
//! only until the draw list is cleared.

mod error;
mod handle;

pub use error::TextureError;
pub use handle::{Texture, TextureId, MAX_PADDING};
