//! Cluster-Berechnung der sichtbaren Gruppen für die aktuelle Zoomstufe.

use crate::app::AppState;
use crate::core::{cluster_group, Category, Cluster, ClusterParams};
use crate::shared::ViewerOptions;

/// Cluster-Parameter einer Kategorie bei gegebener Zoomstufe.
///
/// Der Radius ist in Pixeln konfiguriert und wird in Welteinheiten umgerechnet.
pub fn params_for(options: &ViewerOptions, category: Category, zoom: f64) -> ClusterParams {
    let scale = crate::core::geo::zoom_scale(zoom);
    ClusterParams {
        radius_world: options.cluster_radius_px(category) as f64 / scale,
        medium_threshold: options.cluster_medium_threshold,
        large_threshold: options.cluster_large_threshold,
    }
}

/// Cluster aller angehängten Gruppen, Lieu vor Action.
pub fn visible_clusters(state: &AppState) -> Vec<Cluster> {
    let zoom = state.view.camera.zoom;
    state
        .layers
        .attached_groups()
        .flat_map(|group| {
            let params = params_for(&state.options, group.category(), zoom);
            cluster_group(group, &params)
        })
        .collect()
}
