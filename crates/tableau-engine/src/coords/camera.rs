use super::Vec2;

/// 2D camera applied to the world-space pass of a scene.
///
/// Mapping (world → screen):
/// 1) translate so `target` sits at the origin
/// 2) rotate by `rotation` (radians) and scale by `zoom`
/// 3) translate by `offset` (the screen point `target` lands on)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    pub offset: Vec2,
    pub target: Vec2,
    pub rotation: f32,
    pub zoom: f32,
}

impl Camera2D {
    #[inline]
    pub const fn new(offset: Vec2, target: Vec2, rotation: f32, zoom: f32) -> Self {
        Self { offset, target, rotation, zoom }
    }

    /// Camera that keeps `target` centered in a viewport of `viewport` size.
    pub fn centered_on(target: Vec2, viewport: Vec2) -> Self {
        Self::new(viewport / 2.0, target, 0.0, 1.0)
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        (p - self.target).rotated(self.rotation) * self.zoom + self.offset
    }

    /// Inverse of [`world_to_screen`](Self::world_to_screen).
    ///
    /// A zero zoom has no inverse; the target is returned in that case.
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        if self.zoom == 0.0 {
            return self.target;
        }
        ((p - self.offset) / self.zoom).rotated(-self.rotation) + self.target
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::zero(), 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn default_camera_is_identity() {
        let cam = Camera2D::default();
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(cam.world_to_screen(p), p);
        assert_eq!(cam.screen_to_world(p), p);
    }

    #[test]
    fn centered_camera_maps_target_to_viewport_center() {
        let cam = Camera2D::centered_on(Vec2::new(100.0, 50.0), Vec2::new(800.0, 600.0));
        assert!(close(cam.world_to_screen(Vec2::new(100.0, 50.0)), Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn zoom_scales_distance_from_target() {
        let cam = Camera2D::new(Vec2::zero(), Vec2::zero(), 0.0, 2.0);
        assert!(close(cam.world_to_screen(Vec2::new(3.0, 4.0)), Vec2::new(6.0, 8.0)));
    }

    #[test]
    fn screen_to_world_inverts_rotation_and_zoom() {
        let cam = Camera2D::new(Vec2::new(40.0, 30.0), Vec2::new(5.0, 5.0), 0.7, 1.5);
        let p = Vec2::new(-20.0, 11.0);
        assert!(close(cam.screen_to_world(cam.world_to_screen(p)), p));
    }

    #[test]
    fn zero_zoom_inverse_returns_target() {
        let cam = Camera2D::new(Vec2::zero(), Vec2::new(9.0, 9.0), 0.0, 0.0);
        assert_eq!(cam.screen_to_world(Vec2::new(1.0, 1.0)), Vec2::new(9.0, 9.0));
    }
}
