//! Auffächern von Clustern auf der höchsten Zoomstufe.

use glam::DVec2;

use crate::app::AppState;
use crate::core::{Category, Spider};

/// Fächert die Marker eines Clusters auf; ein vorher aufgefächerter klappt zu.
pub fn spiderfy(state: &mut AppState, category: Category, center: DVec2, marker_ids: &[u64]) {
    let spider = Spider::fan_out(category, center, marker_ids, state.view.camera.scale());
    log::debug!(
        "{} Marker \"{}\" aufgefächert",
        spider.legs.len(),
        category.tag()
    );
    state.view.spider = Some(spider);
}

/// Klappt einen aufgefächerten Cluster zusammen.
pub fn collapse(state: &mut AppState) {
    if state.view.spider.take().is_some() {
        log::debug!("Aufgefächerter Cluster zusammengeklappt");
    }
}

/// Aktiver Spider, sofern seine Gruppe noch angehängt ist.
pub fn active(state: &AppState) -> Option<&Spider> {
    state
        .view
        .spider
        .as_ref()
        .filter(|spider| state.layers.group(spider.category).is_attached())
}
