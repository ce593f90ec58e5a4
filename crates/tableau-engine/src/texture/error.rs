use std::path::PathBuf;

/// Error returned by [`Texture::load`](super::Texture::load).
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load texture {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
