//! Resource path resolution.
//!
//! Textures live under `<root>/textures`, shaders under `<root>/shaders`.
//! Logical names map to `<name>.png`; multi-frame assets number their frames
//! from 1 (`<name>1.png`, `<name>2.png`, …).

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub root: PathBuf,
    pub textures: PathBuf,
    pub shaders: PathBuf,
}

impl ResourcePaths {
    /// Standard layout below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            textures: root.join("textures"),
            shaders: root.join("shaders"),
            root,
        }
    }

    /// `<cwd>/resources`, falling back to a relative `resources` if the
    /// working directory cannot be read.
    pub fn from_current_dir() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|err| {
            log::warn!("cannot read working directory ({err}); using relative resource paths");
            PathBuf::new()
        });
        Self::new(cwd.join("resources"))
    }

    pub fn texture(&self, name: &str) -> PathBuf {
        self.textures.join(format!("{name}.png"))
    }

    /// Path of frame `index` (0-based) of a multi-frame texture.
    pub fn texture_frame(&self, name: &str, index: usize) -> PathBuf {
        self.textures.join(format!("{name}{}.png", index + 1))
    }

    pub fn shader(&self, file: &str) -> PathBuf {
        self.shaders.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_paths_follow_naming_convention() {
        let paths = ResourcePaths::new("/game/resources");
        assert_eq!(paths.texture("button"), PathBuf::from("/game/resources/textures/button.png"));
        assert_eq!(paths.texture_frame("idle", 0), PathBuf::from("/game/resources/textures/idle1.png"));
        assert_eq!(paths.texture_frame("idle", 2), PathBuf::from("/game/resources/textures/idle3.png"));
        assert_eq!(paths.shader("outline.fs"), PathBuf::from("/game/resources/shaders/outline.fs"));
    }
}
