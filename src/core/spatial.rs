//! Spatial-Index (KD-Tree) für schnelle Marker-Abfragen.

use std::collections::HashMap;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::Marker;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Markers
    pub marker_id: u64,
    /// Euklidische Distanz zum Suchpunkt (Welteinheiten)
    pub distance: f64,
}

/// Eine eindeutige Position im Index mit allen Markern, die exakt dort liegen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSlot {
    /// Welt-Position
    pub position: DVec2,
    /// Marker-IDs in Einfüge-Reihenfolge
    pub marker_ids: Vec<u64>,
}

/// Read-only Spatial-Index über platzierbaren Markern.
///
/// Marker ohne endliche Position werden nicht aufgenommen. Deckungsgleiche
/// Marker teilen sich einen Slot; der KD-Tree kennt jede Position nur einmal
/// (kiddo kann nicht beliebig viele identische Punkte in einem Blatt halten).
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    slots: Vec<SpatialSlot>,
    marker_count: usize,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            slots: Vec::new(),
            marker_count: 0,
        }
    }

    /// Baut einen neuen Index aus den übergebenen Markern.
    pub fn from_markers<'a>(markers: impl IntoIterator<Item = &'a Marker>) -> Self {
        let mut slots: Vec<SpatialSlot> = Vec::new();
        let mut slot_by_position: HashMap<[u64; 2], usize> = HashMap::new();
        let mut marker_count = 0;

        for marker in markers.into_iter().filter(|m| m.is_placeable()) {
            // +0.0 normalisiert -0.0, damit beide Nullen denselben Schlüssel ergeben
            let position = marker.position + DVec2::ZERO;
            let key = [position.x.to_bits(), position.y.to_bits()];
            let slot = *slot_by_position.entry(key).or_insert_with(|| {
                slots.push(SpatialSlot {
                    position,
                    marker_ids: Vec::new(),
                });
                slots.len() - 1
            });
            slots[slot].marker_ids.push(marker.id);
            marker_count += 1;
        }

        let entries: Vec<[f64; 2]> = slots
            .iter()
            .map(|slot| [slot.position.x, slot.position.y])
            .collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            slots,
            marker_count,
        }
    }

    /// Gibt die Anzahl indexierter Marker zurück.
    pub fn len(&self) -> usize {
        self.marker_count
    }

    /// Gibt `true` zurück, wenn keine Marker im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.marker_count == 0
    }

    /// Anzahl eindeutiger Positionen.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot an einem Index (Einfüge-Reihenfolge der ersten Marker je Position).
    pub fn slot(&self, slot: usize) -> Option<&SpatialSlot> {
        self.slots.get(slot)
    }

    /// Findet den nächsten Marker zur gegebenen Weltposition.
    ///
    /// Bei deckungsgleichen Markern gewinnt der zuerst eingefügte.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.slots.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let slot = self.slots.get(result.item as usize)?;

        Some(SpatialMatch {
            marker_id: *slot.marker_ids.first()?,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Slots innerhalb eines Radius; sortiert nach Distanz.
    pub fn slots_within_radius(&self, query: DVec2, radius: f64) -> Vec<usize> {
        if self.slots.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut hits = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.into_iter().map(|hit| hit.item as usize).collect()
    }

    /// Findet alle Marker innerhalb eines Radius um die Query-Position.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        self.slots_within_radius(query, radius)
            .into_iter()
            .filter_map(|slot| self.slots.get(slot))
            .flat_map(|slot| {
                let distance = slot.position.distance(query);
                slot.marker_ids.iter().map(move |&marker_id| SpatialMatch {
                    marker_id,
                    distance,
                })
            })
            .collect()
    }
}
