//! Use-Cases für Laufzeit-Optionen.

use super::spider;
use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Übernimmt neue Optionen und hält die Kamera in den neuen Grenzen.
pub fn apply(state: &mut AppState, options: ViewerOptions) {
    state.options = options;
    let (min, max) = state.options.bounds().to_world();
    let camera = &mut state.view.camera;
    camera.zoom = camera
        .zoom
        .max(state.options.min_zoom)
        .min(state.options.max_zoom);
    camera.clamp_to(min, max);
    // Cluster-Radien können sich geändert haben
    spider::collapse(state);
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) {
    apply(state, ViewerOptions::default());
}

/// Persistiert die aktuellen Optionen neben der Binary.
pub fn save(state: &AppState) -> anyhow::Result<()> {
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}
