//! Builder für die Karten-Szene aus dem AppState.

use glam::{DVec2, Vec2};

use crate::app::use_cases::{clustering, spider};
use crate::app::AppState;
use crate::core::ClusterSize;
use crate::shared::{MapScene, SceneItem};

/// Baut eine MapScene aus dem aktuellen AppState.
///
/// Ein aufgefächerter Cluster wird durch seine einzelnen Marker ersetzt, die
/// nach allen anderen Items (also obenauf) folgen.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> MapScene {
    let camera = &state.view.camera;
    let screen_size = Vec2::from(viewport_size);
    let to_screen = |world: DVec2| camera.world_to_screen(world, screen_size).to_array();
    let single_of = |id: u64| {
        state
            .layers
            .find_marker(id)
            .map(|marker| (id, marker.tooltip().to_string()))
    };
    let active_spider = spider::active(state);

    let mut items: Vec<SceneItem> = clustering::visible_clusters(state)
        .into_iter()
        .filter(|cluster| !active_spider.is_some_and(|spider| spider.covers(cluster)))
        .map(|cluster| {
            let single = if cluster.is_single() {
                cluster.marker_ids.first().and_then(|id| single_of(*id))
            } else {
                None
            };
            let coverage = if cluster.is_single() {
                Vec::new()
            } else {
                cluster.coverage.iter().map(|p| to_screen(*p)).collect()
            };
            SceneItem {
                category: cluster.category,
                screen_pos: to_screen(cluster.center),
                count: cluster.count(),
                size: cluster.size,
                single,
                anchor: None,
                coverage,
            }
        })
        .collect();

    if let Some(spider) = active_spider {
        let anchor = to_screen(spider.center);
        items.extend(spider.legs.iter().filter_map(|leg| {
            Some(SceneItem {
                category: spider.category,
                screen_pos: to_screen(leg.position),
                count: 1,
                size: ClusterSize::Small,
                single: Some(single_of(leg.marker_id)?),
                anchor: Some(anchor),
                coverage: Vec::new(),
            })
        }));
    }

    let unplaceable_count = state
        .layers
        .attached_groups()
        .flat_map(|group| group.markers())
        .filter(|marker| !marker.is_placeable())
        .count();

    MapScene {
        camera: camera.clone(),
        viewport_size,
        items,
        unplaceable_count,
        options: state.options.clone(),
    }
}
