//! Handler für Kamera und Viewport.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Category;

/// Setzt die Kamera auf den Start-Ausschnitt zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, steps: f64, focus_world: Option<DVec2>) {
    use_cases::camera::zoom_towards(state, steps, focus_world);
}

/// Zoomt auf die Bounding-Box eines Clusters.
pub fn zoom_to_bounds(state: &mut AppState, min: DVec2, max: DVec2) {
    use_cases::camera::zoom_to_bounds(state, min, max);
}

/// Fächert einen Cluster auf.
pub fn spiderfy(state: &mut AppState, category: Category, center: DVec2, marker_ids: &[u64]) {
    use_cases::spider::spiderfy(state, category, center, marker_ids);
}

/// Klappt einen aufgefächerten Cluster zusammen.
pub fn unspiderfy(state: &mut AppState) {
    use_cases::spider::collapse(state);
}
