//! Marker-Gruppen je Kategorie und ihre Sichtbarkeit auf der Karte.

use super::{Category, Marker};

/// Container gleichartiger Marker mit Sichtbarkeits-Flag.
#[derive(Debug, Clone)]
pub struct MarkerGroup {
    category: Category,
    markers: Vec<Marker>,
    attached: bool,
}

impl MarkerGroup {
    /// Erstellt eine leere, an die Karte gehängte Gruppe.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            markers: Vec::new(),
            attached: true,
        }
    }

    /// Kategorie der Gruppe.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Alle Marker der Gruppe, unabhängig von der Sichtbarkeit.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// `true`, wenn die Gruppe keine Marker enthält.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// `true`, wenn die Gruppe aktuell an der Karte hängt.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Die beiden Gruppen `lieu` und `action`.
#[derive(Debug, Clone)]
pub struct MarkerLayers {
    lieu: MarkerGroup,
    action: MarkerGroup,
}

impl Default for MarkerLayers {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerLayers {
    /// Erstellt beide Gruppen leer und sichtbar.
    pub fn new() -> Self {
        Self {
            lieu: MarkerGroup::new(Category::Lieu),
            action: MarkerGroup::new(Category::Action),
        }
    }

    /// Gruppe einer Kategorie.
    pub fn group(&self, category: Category) -> &MarkerGroup {
        match category {
            Category::Lieu => &self.lieu,
            Category::Action => &self.action,
        }
    }

    fn group_mut(&mut self, category: Category) -> &mut MarkerGroup {
        match category {
            Category::Lieu => &mut self.lieu,
            Category::Action => &mut self.action,
        }
    }

    /// Hängt einen Marker an die Gruppe der Kategorie an.
    ///
    /// Keine Deduplizierung: der Aufrufer fügt jeden Marker genau einmal hinzu.
    pub fn add_to_group(&mut self, marker: Marker, category: Category) {
        self.group_mut(category).markers.push(marker);
    }

    /// Hängt eine Gruppe an die Karte bzw. löst sie davon.
    ///
    /// Die Marker der Gruppe bleiben dabei unverändert erhalten.
    pub fn set_visibility(&mut self, category: Category, visible: bool) {
        let group = self.group_mut(category);
        if visible && !group.attached {
            group.attached = true;
            log::debug!("Gruppe \"{}\" eingeblendet", category);
        } else if !visible && group.attached {
            group.attached = false;
            log::debug!("Gruppe \"{}\" ausgeblendet", category);
        }
    }

    /// Entfernt alle Marker aus beiden Gruppen. Sichtbarkeit bleibt erhalten.
    pub fn clear(&mut self) {
        self.lieu.markers.clear();
        self.action.markers.clear();
    }

    /// Marker-Anzahl einer Kategorie.
    pub fn count(&self, category: Category) -> usize {
        self.group(category).len()
    }

    /// Marker-Anzahl über beide Gruppen.
    pub fn total(&self) -> usize {
        self.lieu.len() + self.action.len()
    }

    /// Iteriert über die aktuell angehängten Gruppen.
    pub fn attached_groups(&self) -> impl Iterator<Item = &MarkerGroup> {
        [&self.lieu, &self.action]
            .into_iter()
            .filter(|g| g.is_attached())
    }

    /// Sucht einen Marker per ID in beiden Gruppen.
    pub fn find_marker(&self, id: u64) -> Option<&Marker> {
        self.lieu
            .markers
            .iter()
            .chain(self.action.markers.iter())
            .find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointRecord;

    fn marker(id: u64, category: Category) -> Marker {
        Marker::from_record(
            id,
            PointRecord {
                lat: 46.5,
                lng: 6.6,
                title: format!("P{id}"),
                description: String::new(),
                category,
            },
        )
    }

    #[test]
    fn groups_start_attached_and_empty() {
        let layers = MarkerLayers::new();
        for category in Category::ALL {
            assert!(layers.group(category).is_attached());
            assert!(layers.group(category).is_empty());
        }
    }

    #[test]
    fn add_routes_by_category() {
        let mut layers = MarkerLayers::new();
        layers.add_to_group(marker(1, Category::Lieu), Category::Lieu);
        layers.add_to_group(marker(2, Category::Action), Category::Action);
        layers.add_to_group(marker(3, Category::Action), Category::Action);

        assert_eq!(layers.count(Category::Lieu), 1);
        assert_eq!(layers.count(Category::Action), 2);
        assert_eq!(layers.total(), 3);
    }

    #[test]
    fn duplicate_adds_are_kept() {
        let mut layers = MarkerLayers::new();
        let m = marker(1, Category::Lieu);
        layers.add_to_group(m.clone(), Category::Lieu);
        layers.add_to_group(m, Category::Lieu);
        assert_eq!(layers.count(Category::Lieu), 2);
    }

    #[test]
    fn hide_and_show_keeps_markers() {
        let mut layers = MarkerLayers::new();
        layers.add_to_group(marker(1, Category::Action), Category::Action);
        layers.add_to_group(marker(2, Category::Action), Category::Action);
        let before = layers.group(Category::Action).markers().to_vec();

        layers.set_visibility(Category::Action, false);
        assert!(!layers.group(Category::Action).is_attached());
        assert_eq!(layers.attached_groups().count(), 1);

        layers.set_visibility(Category::Action, true);
        assert!(layers.group(Category::Action).is_attached());
        assert_eq!(layers.group(Category::Action).markers(), before.as_slice());
    }

    #[test]
    fn clear_empties_both_groups() {
        let mut layers = MarkerLayers::new();
        layers.add_to_group(marker(1, Category::Lieu), Category::Lieu);
        layers.add_to_group(marker(2, Category::Action), Category::Action);
        layers.clear();
        assert_eq!(layers.total(), 0);
        assert!(layers.find_marker(1).is_none());
    }
}
