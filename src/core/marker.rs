//! Marker: positionierter, klickbarer Kartenpunkt.

use glam::DVec2;

use super::{geo, Category, MarkerIcon, PointRecord};

/// Inhalt des Detail-Panels.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    /// Details eines angeklickten Punkts
    Point {
        /// Titel des Punkts
        title: String,
        /// Kategorie (bestimmt Beschriftung und Farbe)
        category: Category,
        /// Beschreibung, bereits an `|` umgebrochen
        description_lines: Vec<String>,
    },
    /// Für den Nutzer sichtbare Fehlermeldung
    Error {
        /// Meldungstext
        message: String,
    },
}

/// Ein Marker auf der Karte. Nach der Erstellung unveränderlich.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Laufende Nummer in Lade-Reihenfolge
    pub id: u64,
    /// Zugrundeliegender Datensatz
    pub record: PointRecord,
    /// Projizierte Weltposition
    pub position: DVec2,
    /// Icon-Variante (aus der Kategorie)
    pub icon: MarkerIcon,
}

impl Marker {
    /// Baut einen Marker aus einem Datensatz.
    pub fn from_record(id: u64, record: PointRecord) -> Self {
        let position = geo::project(record.lat, record.lng);
        let icon = record.category.icon();
        Self {
            id,
            record,
            position,
            icon,
        }
    }

    /// Kategorie des Markers.
    pub fn category(&self) -> Category {
        self.record.category
    }

    /// Hover-Beschriftung.
    pub fn tooltip(&self) -> &str {
        &self.record.title
    }

    /// `true`, wenn der Marker eine gültige Position hat und gezeichnet werden kann.
    pub fn is_placeable(&self) -> bool {
        self.position.is_finite()
    }

    /// Inhalt, den ein Klick auf den Marker im Detail-Panel öffnet.
    pub fn detail_content(&self) -> DetailContent {
        DetailContent::Point {
            title: self.record.title.clone(),
            category: self.record.category,
            description_lines: self.record.description_lines(),
        }
    }
}
