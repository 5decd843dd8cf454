//! 2D-Kamera für Pan und Zoom über der Web-Mercator-Welt.

use glam::{DVec2, Vec2};

use super::geo;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Bildmitte in Welt-Koordinaten
    pub position: DVec2,
    /// Zoomstufe (Kachel-Zoom, 0 = ganze Welt in 256 px)
    pub zoom: f64,
}

impl Camera2D {
    /// Erstellt eine Kamera über dem Welt-Ursprung bei Zoom 0.
    pub fn new() -> Self {
        Self {
            position: DVec2::splat(geo::TILE_SIZE / 2.0),
            zoom: 0.0,
        }
    }

    /// Erstellt eine Kamera über einem Geo-Punkt.
    pub fn centered_on(lat: f64, lng: f64, zoom: f64) -> Self {
        Self {
            position: geo::project(lat, lng),
            zoom,
        }
    }

    /// Zentriert die Kamera auf einen Weltpunkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert die Zoomstufe um `delta` und begrenzt auf `[min, max]`.
    pub fn zoom_by_clamped(&mut self, delta: f64, min: f64, max: f64) {
        self.zoom = (self.zoom + delta).max(min).min(max);
    }

    /// Bildschirm-Pixel pro Welteinheit.
    pub fn scale(&self) -> f64 {
        geo::zoom_scale(self.zoom)
    }

    /// Welteinheiten pro Bildschirm-Pixel.
    pub fn world_per_pixel(&self) -> f64 {
        1.0 / self.scale()
    }

    /// Konvertiert Screen-Koordinaten (relativ zur Viewport-Ecke) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> DVec2 {
        let offset = (screen_pos - screen_size * 0.5).as_dvec2();
        self.position + offset / self.scale()
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zur Viewport-Ecke).
    pub fn world_to_screen(&self, world: DVec2, screen_size: Vec2) -> Vec2 {
        let offset = (world - self.position) * self.scale();
        offset.as_vec2() + screen_size * 0.5
    }

    /// Begrenzt die Bildmitte auf ein Welt-Rechteck.
    pub fn clamp_to(&mut self, min: DVec2, max: DVec2) {
        self.position = self.position.clamp(min, max);
    }

    /// Kleinste Zoomstufe, bei der das Rechteck vollständig in den Viewport passt.
    pub fn zoom_to_fit(min: DVec2, max: DVec2, screen_size: Vec2) -> f64 {
        let extent = (max - min).max(DVec2::splat(f64::EPSILON));
        let fit_x = (screen_size.x as f64 / extent.x).log2();
        let fit_y = (screen_size.y as f64 / extent.y).log2();
        fit_x.min(fit_y)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.position = DVec2::ZERO;
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom = 9.0;
        camera.zoom_by_clamped(10.0, 7.0, 15.0);
        assert_relative_eq!(camera.zoom, 15.0);

        camera.zoom_by_clamped(-20.0, 7.0, 15.0);
        assert_relative_eq!(camera.zoom, 7.0);
    }

    #[test]
    fn test_screen_to_world_center() {
        let camera = Camera2D::centered_on(46.55, 6.75, 9.0);
        let screen_size = Vec2::new(800.0, 600.0);
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, camera.position.x, epsilon = 1e-9);
        assert_relative_eq!(world.y, camera.position.y, epsilon = 1e-9);
    }

    #[test]
    fn test_world_to_screen_inverts_screen_to_world() {
        let camera = Camera2D::centered_on(46.55, 6.75, 12.0);
        let screen_size = Vec2::new(1024.0, 768.0);
        let screen = Vec2::new(100.0, 650.0);
        let back = camera.world_to_screen(camera.screen_to_world(screen, screen_size), screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_level_doubles_scale() {
        let mut camera = Camera2D::new();
        camera.zoom = 3.0;
        let s1 = camera.scale();
        camera.zoom = 4.0;
        assert_relative_eq!(camera.scale(), s1 * 2.0);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let mut camera = Camera2D::new();
        camera.position = DVec2::new(500.0, -3.0);
        camera.clamp_to(DVec2::new(0.0, 0.0), DVec2::new(100.0, 100.0));
        assert_eq!(camera.position, DVec2::new(100.0, 0.0));
    }

    #[test]
    fn test_zoom_to_fit() {
        let zoom = Camera2D::zoom_to_fit(
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 50.0),
            Vec2::new(800.0, 800.0),
        );
        assert_relative_eq!(zoom, 3.0);
    }
}
