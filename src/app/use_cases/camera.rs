//! Use-Case-Funktionen für Kamera-Steuerung.

use glam::{DVec2, Vec2};

use super::spider;
use crate::app::AppState;
use crate::core::Camera2D;

/// Begrenzt Zoom und Bildmitte auf die konfigurierten Grenzen.
fn clamp_camera(state: &mut AppState) {
    let options = &state.options;
    let (min, max) = options.bounds().to_world();
    let camera = &mut state.view.camera;
    camera.zoom = camera.zoom.max(options.min_zoom).min(options.max_zoom);
    camera.clamp_to(min, max);
}

/// Aufgefächerte Cluster gelten nur für die Zoomstufe, auf der sie entstanden.
fn collapse_spider_on_zoom_change(state: &mut AppState, old_zoom: f64) {
    if state.view.camera.zoom != old_zoom {
        spider::collapse(state);
    }
}

/// Setzt die Kamera auf den konfigurierten Start-Ausschnitt zurück.
pub fn reset_view(state: &mut AppState) {
    let old_zoom = state.view.camera.zoom;
    let [lat, lng] = state.options.initial_center;
    state.view.camera = Camera2D::centered_on(lat, lng, state.options.initial_zoom);
    clamp_camera(state);
    collapse_spider_on_zoom_change(state, old_zoom);
}

/// Zoomt die Kamera um einen Schritt hinein.
pub fn zoom_in(state: &mut AppState) {
    zoom_towards(state, state.options.zoom_step, None);
}

/// Zoomt die Kamera um einen Schritt heraus.
pub fn zoom_out(state: &mut AppState) {
    zoom_towards(state, -state.options.zoom_step, None);
}

/// Verschiebt die Kamera um ein Welt-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.camera.pan(delta);
    clamp_camera(state);
}

/// Zoomt um `steps` Stufen auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, steps: f64, focus_world: Option<DVec2>) {
    let old_zoom = state.view.camera.zoom;
    let old_scale = state.view.camera.scale();
    state.view.camera.zoom_by_clamped(
        steps,
        state.options.min_zoom,
        state.options.max_zoom,
    );

    if let Some(focus) = focus_world {
        let ratio = old_scale / state.view.camera.scale();
        let position = state.view.camera.position;
        state.view.camera.position = focus + (position - focus) * ratio;
    }
    clamp_camera(state);
    collapse_spider_on_zoom_change(state, old_zoom);
}

/// Zentriert auf ein Welt-Rechteck und wählt die größte passende Zoomstufe.
///
/// Ohne bekannte Viewport-Größe wird nur um eine Stufe hineingezoomt.
pub fn zoom_to_bounds(state: &mut AppState, min: DVec2, max: DVec2) {
    let old_zoom = state.view.camera.zoom;
    let [width, height] = state.view.viewport_size;
    let target_zoom = if width > 0.0 && height > 0.0 {
        Camera2D::zoom_to_fit(min, max, Vec2::new(width, height)).floor()
    } else {
        state.view.camera.zoom + state.options.zoom_step
    };

    state.view.camera.look_at((min + max) * 0.5);
    // Nie herauszoomen, wenn auf einen Cluster geklickt wird
    state.view.camera.zoom = target_zoom.max(state.view.camera.zoom);
    clamp_camera(state);
    collapse_spider_on_zoom_change(state, old_zoom);

    log::debug!(
        "Zoom auf Bereich ({:.3}, {:.3})..({:.3}, {:.3}), Zoomstufe {:.2}",
        min.x,
        min.y,
        max.x,
        max.y,
        state.view.camera.zoom
    );
}
