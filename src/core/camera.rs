//! Orbit-Kamera mit orthografischer Projektion für den 3D-Viewport.

use glam::{Quat, Vec2, Vec3};

/// Orbit-Kamera um einen Zielpunkt
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Punkt, um den die Kamera kreist (Welt-Koordinaten)
    pub target: Vec3,
    /// Drehung um die vertikale Achse in Radiant
    pub yaw: f32,
    /// Neigung in Radiant (positiv = von oben)
    pub pitch: f32,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera3D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 2.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 50.0;
    /// Maximale Neigung, damit die Kamera nie senkrecht steht.
    const PITCH_LIMIT: f32 = 1.55;
    /// Abstand des Strahlursprungs hinter der Bildebene.
    const RAY_BACKOFF: f32 = 1000.0;

    /// Erstellt eine neue Kamera mit leichter Schrägsicht
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.6,
            pitch: 0.4,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Dreht die Kamera um den Zielpunkt
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(-self.pitch)
    }

    /// Blickrichtung der Kamera (Welt-Koordinaten)
    pub fn view_direction(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    /// Pixel pro Welteinheit bei gegebener Viewport-Höhe.
    pub fn pixels_per_unit(&self, viewport_height: f32) -> f32 {
        viewport_height.max(1.0) * self.zoom / (2.0 * Self::BASE_WORLD_EXTENT)
    }

    /// Projiziert eine Weltposition in Screen-Koordinaten (Ursprung oben links).
    pub fn world_to_screen(&self, world: Vec3, screen_size: Vec2) -> Vec2 {
        let relative = world - self.target;
        let scale = self.pixels_per_unit(screen_size.y);
        let center = screen_size * 0.5;
        Vec2::new(
            center.x + relative.dot(self.right()) * scale,
            center.y - relative.dot(self.up()) * scale,
        )
    }

    /// Liefert den Pick-Strahl (Ursprung, Richtung) durch einen Screen-Punkt.
    pub fn screen_to_ray(&self, screen_pos: Vec2, screen_size: Vec2) -> (Vec3, Vec3) {
        let scale = self.pixels_per_unit(screen_size.y);
        let center = screen_size * 0.5;
        let x = (screen_pos.x - center.x) / scale;
        let y = -(screen_pos.y - center.y) / scale;
        let direction = self.view_direction();
        let origin =
            self.target + self.right() * x + self.up() * y - direction * Self::RAY_BACKOFF;
        (origin, direction)
    }

    /// Rechnet einen Pick-Radius in Pixeln in Welteinheiten um.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px / self.pixels_per_unit(viewport_height)
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_viewport_center() {
        let camera = Camera3D::new();
        let screen = camera.world_to_screen(Vec3::ZERO, Vec2::new(800.0, 600.0));
        assert!(screen.abs_diff_eq(Vec2::new(400.0, 300.0), 1e-4));
    }

    #[test]
    fn screen_ray_passes_through_projected_point() {
        let mut camera = Camera3D::new();
        camera.orbit(0.3, -0.2);
        camera.zoom_by(2.0);
        let size = Vec2::new(1024.0, 768.0);
        let world = Vec3::new(0.5, 1.0, -0.25);

        let screen = camera.world_to_screen(world, size);
        let (origin, direction) = camera.screen_to_ray(screen, size);

        let depth = (world - origin).dot(direction);
        let closest = origin + direction * depth;
        assert!(closest.distance(world) < 1e-2);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera3D::new();
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= 1.55);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera3D::new();
        camera.zoom_by(1000.0);
        assert_eq!(camera.zoom, Camera3D::ZOOM_MAX);
    }
}
