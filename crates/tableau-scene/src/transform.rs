use tableau_engine::coords::Vec2;

/// Position, rotation (radians) and uniform scale of an object in 2D space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

impl Transform {
    #[inline]
    pub const fn new(position: Vec2, rotation: f32, scale: f32) -> Self {
        Self { position, rotation, scale }
    }

    /// Unrotated, unscaled transform at `position`.
    #[inline]
    pub const fn at(position: Vec2) -> Self {
        Self::new(position, 0.0, 1.0)
    }

    #[inline]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub const fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::zero(), 0.0, 1.0)
    }
}
