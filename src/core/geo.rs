//! Web-Mercator-Projektion zwischen Geo-Koordinaten und Weltkoordinaten.
//!
//! Weltkoordinaten entsprechen Pixeln einer 256er-Kachel bei Zoomstufe 0,
//! Y wächst nach Süden.

use glam::DVec2;
use std::f64::consts::PI;

/// Kantenlänge der Welt bei Zoomstufe 0.
pub const TILE_SIZE: f64 = 256.0;

/// Maximal darstellbarer Breitengrad der Projektion.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Rechteck in Geo-Koordinaten (Südwest- und Nordost-Ecke).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke `[lat, lng]`
    pub south_west: [f64; 2],
    /// Nordost-Ecke `[lat, lng]`
    pub north_east: [f64; 2],
}

impl GeoBounds {
    /// Erstellt Grenzen aus zwei beliebig geordneten Ecken.
    pub fn new(a: [f64; 2], b: [f64; 2]) -> Self {
        Self {
            south_west: [a[0].min(b[0]), a[1].min(b[1])],
            north_east: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    /// Projiziert die Grenzen in Weltkoordinaten `(min, max)`.
    pub fn to_world(&self) -> (DVec2, DVec2) {
        // Norden liegt bei kleinerem Y
        let nw = project(self.north_east[0], self.south_west[1]);
        let se = project(self.south_west[0], self.north_east[1]);
        (nw, se)
    }
}

/// Projiziert `(lat, lng)` in Weltkoordinaten.
///
/// Nicht-endliche Eingaben ergeben nicht-endliche Positionen; endliche Breiten
/// werden auf den projizierbaren Bereich begrenzt.
pub fn project(lat: f64, lng: f64) -> DVec2 {
    if !lat.is_finite() {
        return DVec2::NAN;
    }
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lng + 180.0) / 360.0 * TILE_SIZE;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * TILE_SIZE;
    DVec2::new(x, y)
}

/// Rechnet Weltkoordinaten zurück in `(lat, lng)`.
pub fn unproject(world: DVec2) -> (f64, f64) {
    let lng = world.x / TILE_SIZE * 360.0 - 180.0;
    let n = PI - 2.0 * PI * world.y / TILE_SIZE;
    let lat = n.sinh().atan().to_degrees();
    (lat, lng)
}

/// Skalierungsfaktor (Bildschirm-Pixel pro Welteinheit) einer Zoomstufe.
pub fn zoom_scale(zoom: f64) -> f64 {
    2f64.powf(zoom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_maps_to_world_center() {
        let p = project(0.0, 0.0);
        assert_relative_eq!(p.x, 128.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 128.0, epsilon = 1e-9);
    }

    #[test]
    fn project_unproject_lausanne() {
        let p = project(46.5197, 6.6323);
        let (lat, lng) = unproject(p);
        assert_relative_eq!(lat, 46.5197, epsilon = 1e-9);
        assert_relative_eq!(lng, 6.6323, epsilon = 1e-9);
    }

    #[test]
    fn infinite_latitude_is_not_clamped_onto_the_map() {
        assert!(!project(f64::INFINITY, 6.6).is_finite());
        assert!(!project(f64::NEG_INFINITY, 6.6).is_finite());
        assert!(!project(46.5, f64::INFINITY).is_finite());
    }

    #[test]
    fn north_has_smaller_y() {
        assert!(project(47.0, 6.5).y < project(46.0, 6.5).y);
    }

    #[test]
    fn nan_stays_nan() {
        let p = project(f64::NAN, 6.0);
        assert!(p.y.is_nan());
        assert!(p.x.is_finite());
    }

    #[test]
    fn bounds_to_world_are_ordered() {
        let bounds = GeoBounds::new([47.5, 7.5], [46.0, 6.0]);
        let (min, max) = bounds.to_world();
        assert!(min.x < max.x);
        assert!(min.y < max.y);
    }
}
