//! Auffächern ("Spiderfy") von Clustern, die sich durch Zoomen nicht mehr auflösen.
//!
//! Die Mitglieder werden in Bildschirm-Pixeln um den Cluster-Schwerpunkt
//! angeordnet: bis 8 Marker im Kreis, ab 9 Markern als Spirale.

use std::f64::consts::TAU;

use glam::DVec2;

use super::{Category, Cluster};

/// Ab dieser Anzahl wird statt des Kreises eine Spirale gelegt.
const CIRCLE_SPIRAL_SWITCHOVER: usize = 9;
/// Abstand der Marker auf dem Kreisumfang (px)
const CIRCLE_FOOT_SEPARATION: f64 = 25.0;
/// Minimaler Kreisradius (px)
const CIRCLE_MIN_LEG_LENGTH: f64 = 35.0;
/// Abstand der Marker entlang der Spirale (px)
const SPIRAL_FOOT_SEPARATION: f64 = 28.0;
/// Start-Radius der Spirale (px)
const SPIRAL_LENGTH_START: f64 = 11.0;
/// Wachstum des Spiral-Radius
const SPIRAL_LENGTH_FACTOR: f64 = 5.0;

/// Pixel-Versätze für `count` aufgefächerte Marker relativ zum Zentrum.
pub fn spider_offsets(count: usize) -> Vec<DVec2> {
    if count >= CIRCLE_SPIRAL_SWITCHOVER {
        spiral_offsets(count)
    } else {
        circle_offsets(count)
    }
}

fn circle_offsets(count: usize) -> Vec<DVec2> {
    if count == 0 {
        return Vec::new();
    }
    let circumference = CIRCLE_FOOT_SEPARATION * (2 + count) as f64;
    let leg_length = (circumference / TAU).max(CIRCLE_MIN_LEG_LENGTH);
    let angle_step = TAU / count as f64;

    (0..count)
        .map(|i| DVec2::from_angle(i as f64 * angle_step) * leg_length)
        .collect()
}

fn spiral_offsets(count: usize) -> Vec<DVec2> {
    let mut offsets = vec![DVec2::ZERO; count];
    let mut leg_length = SPIRAL_LENGTH_START;
    let mut angle = 0.0_f64;

    // Von außen nach innen, damit der erste Marker am Ende der Spirale liegt
    for i in (0..=count).rev() {
        if i < count {
            offsets[i] = DVec2::from_angle(angle) * leg_length;
        }
        angle += SPIRAL_FOOT_SEPARATION / leg_length + i as f64 * 0.0005;
        leg_length += SPIRAL_LENGTH_FACTOR * TAU / angle;
    }
    offsets
}

/// Ein aufgefächerter Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiderLeg {
    /// ID des Markers
    pub marker_id: u64,
    /// Angezeigte Position (Welt-Koordinaten)
    pub position: DVec2,
}

/// Ein aufgefächerter Cluster. Gilt nur für die Zoomstufe, auf der er entstand.
#[derive(Debug, Clone, PartialEq)]
pub struct Spider {
    /// Kategorie des Clusters
    pub category: Category,
    /// Cluster-Schwerpunkt (Welt-Koordinaten)
    pub center: DVec2,
    /// Aufgefächerte Marker in Cluster-Reihenfolge
    pub legs: Vec<SpiderLeg>,
}

impl Spider {
    /// Fächert die Marker um `center` auf; `scale` = Pixel pro Welteinheit.
    pub fn fan_out(category: Category, center: DVec2, marker_ids: &[u64], scale: f64) -> Self {
        let legs = marker_ids
            .iter()
            .zip(spider_offsets(marker_ids.len()))
            .map(|(&marker_id, offset)| SpiderLeg {
                marker_id,
                position: center + offset / scale,
            })
            .collect();
        Self {
            category,
            center,
            legs,
        }
    }

    /// `true`, wenn der Marker Teil dieses Spiders ist.
    pub fn contains(&self, marker_id: u64) -> bool {
        self.legs.iter().any(|leg| leg.marker_id == marker_id)
    }

    /// `true`, wenn der Cluster durch diesen Spider ersetzt wird.
    pub fn covers(&self, cluster: &Cluster) -> bool {
        cluster.category == self.category
            && !cluster.is_single()
            && cluster.marker_ids.iter().all(|&id| self.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClusterSize;

    #[test]
    fn small_counts_are_laid_out_on_a_circle() {
        let offsets = spider_offsets(4);

        assert_eq!(offsets.len(), 4);
        for offset in &offsets {
            assert!((offset.length() - CIRCLE_MIN_LEG_LENGTH).abs() < 1e-9);
        }
    }

    #[test]
    fn large_counts_spiral_outwards_without_overlap() {
        let offsets = spider_offsets(30);

        assert_eq!(offsets.len(), 30);
        assert!(offsets[0].length() > offsets[29].length());
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert!(a.distance(*b) > 10.0);
            }
        }
    }

    #[test]
    fn fan_out_converts_pixels_to_world_units() {
        let spider = Spider::fan_out(Category::Lieu, DVec2::new(10.0, 10.0), &[1, 2], 100.0);

        assert_eq!(spider.legs.len(), 2);
        for leg in &spider.legs {
            let distance = leg.position.distance(spider.center);
            assert!((distance - CIRCLE_MIN_LEG_LENGTH / 100.0).abs() < 1e-9);
        }
        assert_ne!(spider.legs[0].position, spider.legs[1].position);
    }

    #[test]
    fn spider_covers_only_its_own_cluster() {
        let spider = Spider::fan_out(Category::Action, DVec2::ZERO, &[3, 4], 1.0);
        let cluster = |category, marker_ids: Vec<u64>| Cluster {
            category,
            marker_ids,
            center: DVec2::ZERO,
            min: DVec2::ZERO,
            max: DVec2::ZERO,
            coverage: Vec::new(),
            size: ClusterSize::Small,
        };

        assert!(spider.covers(&cluster(Category::Action, vec![3, 4])));
        assert!(!spider.covers(&cluster(Category::Lieu, vec![3, 4])));
        assert!(!spider.covers(&cluster(Category::Action, vec![3, 5])));
        assert!(!spider.covers(&cluster(Category::Action, vec![3])));
    }
}
