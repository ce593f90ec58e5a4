use std::fmt;
use std::path::Path;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::{Rgba, RgbaImage};

use crate::coords::{Rect, Vec2};

use super::TextureError;

/// Largest margin [`Texture::padded`] adds on each side.
pub const MAX_PADDING: u32 = 1024;

/// Process-unique texture identity. Backends key GPU uploads on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TextureId(u64);

impl TextureId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to immutable RGBA8 pixels.
///
/// Clones share pixels and identity. Any transformation (e.g. [`padded`])
/// produces a new texture with a new id.
///
/// [`padded`]: Texture::padded
#[derive(Clone)]
pub struct Texture {
    id: TextureId,
    pixels: Rc<RgbaImage>,
}

impl Texture {
    /// Wraps an in-memory image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { id: TextureId::next(), pixels: Rc::new(image) }
    }

    /// Texture of `width × height` pixels filled with straight-alpha `rgba`.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    /// Decodes an image file (PNG, JPEG, BMP) into a texture.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| TextureError::Load { path: path.to_path_buf(), source })?;
        log::debug!("loaded texture {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::from_image(image.into_rgba8()))
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size in pixels as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// The whole texture as a source rectangle.
    #[inline]
    pub fn source_rect(&self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), self.size())
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Expands the canvas by `margin` transparent pixels on every side,
    /// keeping the source pixels centered.
    ///
    /// `margin` is capped at [`MAX_PADDING`].
    pub fn padded(&self, margin: u32) -> Texture {
        if margin > MAX_PADDING {
            log::warn!("texture padding {margin} exceeds {MAX_PADDING}; clamped");
        }
        let margin = margin.min(MAX_PADDING);
        let grow = |side: u32| side.saturating_add(2 * margin);
        let mut canvas = RgbaImage::from_pixel(grow(self.width()), grow(self.height()), Rgba([0, 0, 0, 0]));
        image::imageops::replace(&mut canvas, &*self.pixels, i64::from(margin), i64::from(margin));
        Texture::from_image(canvas)
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
