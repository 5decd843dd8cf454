//! Radius-Clustering der Marker einer Gruppe für die aktuelle Zoomstufe.

use glam::DVec2;

use super::{Category, MarkerGroup, SpatialIndex};

/// Größenklasse eines Clusters (bestimmt die Darstellung).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterSize {
    /// Bis einschließlich `medium_threshold` Marker
    Small,
    /// Mehr als `medium_threshold` Marker
    Medium,
    /// Mehr als `large_threshold` Marker
    Large,
}

impl ClusterSize {
    /// Klassifiziert eine Marker-Anzahl.
    pub fn classify(count: usize, medium_threshold: usize, large_threshold: usize) -> Self {
        if count > large_threshold {
            ClusterSize::Large
        } else if count > medium_threshold {
            ClusterSize::Medium
        } else {
            ClusterSize::Small
        }
    }
}

/// Parameter für einen Clustering-Durchlauf.
#[derive(Debug, Clone, Copy)]
pub struct ClusterParams {
    /// Cluster-Radius in Welteinheiten (0 = kein Zusammenfassen)
    pub radius_world: f64,
    /// Schwelle für `ClusterSize::Medium`
    pub medium_threshold: usize,
    /// Schwelle für `ClusterSize::Large`
    pub large_threshold: usize,
}

/// Ein Cluster aus einem oder mehreren Markern derselben Kategorie.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Kategorie aller enthaltenen Marker
    pub category: Category,
    /// IDs der enthaltenen Marker
    pub marker_ids: Vec<u64>,
    /// Schwerpunkt (Welt-Koordinaten)
    pub center: DVec2,
    /// Minimale Ecke der Bounding-Box
    pub min: DVec2,
    /// Maximale Ecke der Bounding-Box
    pub max: DVec2,
    /// Konvexe Hülle der Marker-Positionen (gegen den Uhrzeigersinn)
    pub coverage: Vec<DVec2>,
    /// Größenklasse
    pub size: ClusterSize,
}

impl Cluster {
    /// Anzahl enthaltener Marker.
    pub fn count(&self) -> usize {
        self.marker_ids.len()
    }

    /// `true`, wenn der Cluster nur einen einzelnen Marker enthält.
    pub fn is_single(&self) -> bool {
        self.marker_ids.len() == 1
    }

    /// `true`, wenn alle Marker exakt auf einem Punkt liegen.
    ///
    /// Solche Cluster lösen sich durch Hineinzoomen nie auf.
    pub fn is_coincident(&self) -> bool {
        self.min == self.max
    }
}

/// Fasst die platzierbaren Marker einer Gruppe gierig zu Clustern zusammen.
///
/// Positionen werden in Lade-Reihenfolge abgearbeitet; jede noch freie Position
/// eröffnet einen Cluster und übernimmt alle freien Positionen im Radius.
/// Bei Radius 0 bleibt jeder Marker ein eigener Cluster, auch deckungsgleiche.
pub fn cluster_group(group: &MarkerGroup, params: &ClusterParams) -> Vec<Cluster> {
    let index = SpatialIndex::from_markers(group.markers());
    let classify =
        |count: usize| ClusterSize::classify(count, params.medium_threshold, params.large_threshold);

    if params.radius_world <= 0.0 {
        return (0..index.slot_count())
            .filter_map(|slot| index.slot(slot))
            .flat_map(|slot| {
                slot.marker_ids.iter().map(move |&id| Cluster {
                    category: group.category(),
                    marker_ids: vec![id],
                    center: slot.position,
                    min: slot.position,
                    max: slot.position,
                    coverage: vec![slot.position],
                    size: classify(1),
                })
            })
            .collect();
    }

    let mut assigned = vec![false; index.slot_count()];
    let mut clusters = Vec::new();

    for seed in 0..index.slot_count() {
        if assigned[seed] {
            continue;
        }
        let Some(seed_slot) = index.slot(seed) else {
            continue;
        };

        let mut marker_ids = Vec::new();
        let mut positions = Vec::new();
        let mut sum = DVec2::ZERO;
        let mut min = seed_slot.position;
        let mut max = seed_slot.position;

        for slot in index.slots_within_radius(seed_slot.position, params.radius_world) {
            if assigned[slot] {
                continue;
            }
            let Some(member) = index.slot(slot) else {
                continue;
            };
            assigned[slot] = true;
            marker_ids.extend_from_slice(&member.marker_ids);
            positions.push(member.position);
            sum += member.position * member.marker_ids.len() as f64;
            min = min.min(member.position);
            max = max.max(member.position);
        }

        let count = marker_ids.len();
        if count == 0 {
            continue;
        }
        clusters.push(Cluster {
            category: group.category(),
            center: sum / count as f64,
            min,
            max,
            coverage: convex_hull(positions),
            size: classify(count),
            marker_ids,
        });
    }

    clusters
}

/// Konvexe Hülle (Andrew's Monotone Chain), gegen den Uhrzeigersinn.
///
/// Bei weniger als drei verschiedenen Punkten werden diese unverändert geliefert.
pub fn convex_hull(mut points: Vec<DVec2>) -> Vec<DVec2> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup();
    if points.len() < 3 {
        return points;
    }

    let cross = |o: DVec2, a: DVec2, b: DVec2| (a - o).perp_dot(b - o);
    let mut hull: Vec<DVec2> = Vec::with_capacity(points.len() * 2);

    for &p in &points {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in points.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Marker, MarkerLayers, PointRecord};

    fn layers_with(points: &[(f64, f64)], category: Category) -> MarkerLayers {
        let mut layers = MarkerLayers::new();
        for (i, (lat, lng)) in points.iter().enumerate() {
            let marker = Marker::from_record(
                i as u64 + 1,
                PointRecord {
                    lat: *lat,
                    lng: *lng,
                    title: String::new(),
                    description: String::new(),
                    category,
                },
            );
            layers.add_to_group(marker, category);
        }
        layers
    }

    fn params(radius_world: f64) -> ClusterParams {
        ClusterParams {
            radius_world,
            medium_threshold: 10,
            large_threshold: 50,
        }
    }

    #[test]
    fn size_thresholds_are_exclusive() {
        assert_eq!(ClusterSize::classify(1, 10, 50), ClusterSize::Small);
        assert_eq!(ClusterSize::classify(10, 10, 50), ClusterSize::Small);
        assert_eq!(ClusterSize::classify(11, 10, 50), ClusterSize::Medium);
        assert_eq!(ClusterSize::classify(50, 10, 50), ClusterSize::Medium);
        assert_eq!(ClusterSize::classify(51, 10, 50), ClusterSize::Large);
    }

    #[test]
    fn close_markers_merge_far_markers_stay_apart() {
        let layers = layers_with(
            &[(46.5197, 6.6323), (46.5198, 6.6324), (46.2044, 6.1432)],
            Category::Lieu,
        );
        let clusters = cluster_group(layers.group(Category::Lieu), &params(0.01));

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].count(), 2);
        assert!(clusters[1].is_single());
        assert_eq!(clusters[0].category, Category::Lieu);
    }

    #[test]
    fn zero_radius_keeps_every_marker_single() {
        let layers = layers_with(&[(46.5, 6.6), (46.5, 6.6)], Category::Action);
        let clusters = cluster_group(layers.group(Category::Action), &params(0.0));
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(Cluster::is_single));
    }

    #[test]
    fn every_placeable_marker_lands_in_exactly_one_cluster() {
        let points: Vec<(f64, f64)> = (0..60)
            .map(|i| (46.0 + i as f64 * 0.001, 6.5 + i as f64 * 0.001))
            .chain(std::iter::once((f64::NAN, 6.5)))
            .collect();
        let layers = layers_with(&points, Category::Lieu);
        let clusters = cluster_group(layers.group(Category::Lieu), &params(1.0));

        let total: usize = clusters.iter().map(Cluster::count).sum();
        assert_eq!(total, 60);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size, ClusterSize::Large);
    }

    #[test]
    fn many_coincident_markers_form_one_cluster() {
        let points = vec![(46.5, 6.6); 40];
        let layers = layers_with(&points, Category::Lieu);

        let clusters = cluster_group(layers.group(Category::Lieu), &params(0.01));

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].count(), 40);
        assert_eq!(clusters[0].marker_ids, (1..=40).collect::<Vec<u64>>());
        assert_eq!(clusters[0].size, ClusterSize::Medium);
        assert!(clusters[0].is_coincident());
        assert_eq!(clusters[0].center, clusters[0].min);
    }

    #[test]
    fn coincident_markers_next_to_others_are_weighted_in_centroid() {
        let layers = layers_with(
            &[(46.5, 6.6), (46.5, 6.6), (46.5, 6.6), (46.5001, 6.6001)],
            Category::Action,
        );

        let clusters = cluster_group(layers.group(Category::Action), &params(0.01));

        assert_eq!(clusters.len(), 1);
        let cluster = &clusters[0];
        assert_eq!(cluster.count(), 4);
        assert!(!cluster.is_coincident());
        let expected_x = cluster.min.x + (cluster.max.x - cluster.min.x) * 0.25;
        assert!((cluster.center.x - expected_x).abs() < 1e-9);
    }

    #[test]
    fn coverage_hull_drops_interior_points() {
        let hull = convex_hull(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(0.0, 0.0),
        ]);

        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn coverage_of_two_points_is_the_segment() {
        let hull = convex_hull(vec![DVec2::new(1.0, 0.0), DVec2::new(0.0, 0.0)]);
        assert_eq!(hull, vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)]);
    }
}
