//! Treffertest für Klicks auf die Karte.

use glam::DVec2;

use super::{clustering, spider};
use crate::app::AppState;
use crate::core::{Category, Cluster};

/// Ergebnis eines Klicks auf die Karte.
#[derive(Debug, Clone, PartialEq)]
pub enum PickResult {
    /// Einzelner (ggf. aufgefächerter) Marker getroffen
    Marker(u64),
    /// Cluster getroffen
    Cluster {
        /// Kategorie des Clusters
        category: Category,
        /// Schwerpunkt (Welt-Koordinaten)
        center: DVec2,
        /// Enthaltene Marker
        marker_ids: Vec<u64>,
        /// Minimale Ecke der Bounding-Box
        min: DVec2,
        /// Maximale Ecke der Bounding-Box
        max: DVec2,
    },
}

/// Sucht das oberste Item unter `world_pos` innerhalb des Pick-Radius.
///
/// Aufgefächerte Marker liegen über allem. Action wird über Lieu gezeichnet
/// und gewinnt daher bei Überlappung.
pub fn pick_at(state: &AppState, world_pos: DVec2) -> Option<PickResult> {
    let max_distance = state.options.pick_radius_px as f64 / state.view.camera.scale();
    let active_spider = spider::active(state);

    if let Some(spider) = active_spider {
        let leg = spider
            .legs
            .iter()
            .map(|leg| (leg, leg.position.distance(world_pos)))
            .filter(|(_, distance)| *distance <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((leg, _)) = leg {
            return Some(PickResult::Marker(leg.marker_id));
        }
    }

    let clusters = clustering::visible_clusters(state);
    let mut best: Option<(&Cluster, f64)> = None;
    for cluster in clusters.iter().rev() {
        if active_spider.is_some_and(|spider| spider.covers(cluster)) {
            continue;
        }
        let distance = cluster.center.distance(world_pos);
        if distance > max_distance {
            continue;
        }
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((cluster, distance));
        }
    }
    let (hit, _) = best?;

    if hit.is_single() {
        hit.marker_ids.first().copied().map(PickResult::Marker)
    } else {
        Some(PickResult::Cluster {
            category: hit.category,
            center: hit.center,
            marker_ids: hit.marker_ids.clone(),
            min: hit.min,
            max: hit.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{geo, Category, Marker, PointRecord};

    fn add(state: &mut AppState, id: u64, lat: f64, lng: f64, category: Category) {
        let record = PointRecord {
            lat,
            lng,
            title: format!("Punkt {id}"),
            description: String::new(),
            category,
        };
        state
            .layers
            .add_to_group(Marker::from_record(id, record), category);
    }

    #[test]
    fn click_on_single_marker_returns_its_id() {
        let mut state = AppState::new();
        add(&mut state, 1, 46.52, 6.63, Category::Lieu);
        add(&mut state, 2, 46.78, 6.64, Category::Action);

        let hit = pick_at(&state, geo::project(46.78, 6.64));

        assert_eq!(hit, Some(PickResult::Marker(2)));
    }

    #[test]
    fn click_next_to_marker_outside_radius_misses() {
        let mut state = AppState::new();
        add(&mut state, 1, 46.52, 6.63, Category::Lieu);

        assert_eq!(pick_at(&state, geo::project(46.70, 6.90)), None);
    }

    #[test]
    fn click_on_cluster_returns_bounds() {
        let mut state = AppState::new();
        add(&mut state, 1, 46.5200, 6.6300, Category::Lieu);
        add(&mut state, 2, 46.5201, 6.6302, Category::Lieu);

        match pick_at(&state, geo::project(46.52005, 6.6301)) {
            Some(PickResult::Cluster {
                marker_ids,
                min,
                max,
                ..
            }) => {
                assert_eq!(marker_ids, vec![1, 2]);
                assert!(min.x < max.x);
            }
            other => panic!("Cluster erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn hidden_markers_cannot_be_picked() {
        let mut state = AppState::new();
        add(&mut state, 1, 46.52, 6.63, Category::Action);
        state.layers.set_visibility(Category::Action, false);

        assert_eq!(pick_at(&state, geo::project(46.52, 6.63)), None);
    }

    #[test]
    fn spider_legs_are_picked_before_clusters() {
        let mut state = AppState::new();
        add(&mut state, 1, 46.52, 6.63, Category::Lieu);
        add(&mut state, 2, 46.52, 6.63, Category::Lieu);
        let center = geo::project(46.52, 6.63);
        spider::spiderfy(&mut state, Category::Lieu, center, &[1, 2]);

        let legs = state.view.spider.clone().expect("Spider erwartet").legs;
        assert_eq!(pick_at(&state, legs[1].position), Some(PickResult::Marker(2)));
        assert_eq!(pick_at(&state, legs[0].position), Some(PickResult::Marker(1)));
        // Das Zentrum selbst ist leer, der Cluster wird durch den Spider ersetzt
        assert_eq!(pick_at(&state, center), None);
    }
}
