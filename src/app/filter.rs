//! Filterzustand der beiden Kategorien und Abgleich mit den Gruppen.

use crate::core::{Category, MarkerLayers};

/// Checkbox-Zustand je Kategorie. Nicht persistent, Start: beide sichtbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    /// Checkbox "Lieu mobilisé"
    pub show_lieu: bool,
    /// Checkbox "Action durant la journée"
    pub show_action: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            show_lieu: true,
            show_action: true,
        }
    }
}

impl FilterState {
    /// Checkbox-Wert einer Kategorie.
    pub fn is_checked(&self, category: Category) -> bool {
        match category {
            Category::Lieu => self.show_lieu,
            Category::Action => self.show_action,
        }
    }

    /// Setzt den Checkbox-Wert einer Kategorie.
    pub fn set(&mut self, category: Category, checked: bool) {
        match category {
            Category::Lieu => self.show_lieu = checked,
            Category::Action => self.show_action = checked,
        }
    }
}

/// Leitet die Sichtbarkeit beider Gruppen vollständig aus dem Filter ab.
pub fn sync_visibility(filter: &FilterState, layers: &mut MarkerLayers) {
    for category in Category::ALL {
        layers.set_visibility(category, filter.is_checked(category));
    }
}
