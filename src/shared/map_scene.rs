//! Karten-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use super::options::ViewerOptions;
use crate::core::{Camera2D, Category, ClusterSize};

/// Ein zu zeichnender Punkt: einzelner Marker oder Cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    /// Kategorie (Farbe, Icon)
    pub category: Category,
    /// Position relativ zur Viewport-Ecke in Pixeln
    pub screen_pos: [f32; 2],
    /// Anzahl enthaltener Marker
    pub count: usize,
    /// Größenklasse (nur für Cluster relevant)
    pub size: ClusterSize,
    /// Marker-ID und Titel, falls einzelner Marker
    pub single: Option<(u64, String)>,
    /// Cluster-Zentrum eines aufgefächerten Markers (Ansatz der Verbindungslinie)
    pub anchor: Option<[f32; 2]>,
    /// Abgedeckte Fläche eines Clusters als Polygon in Pixeln (leer bei Markern)
    pub coverage: Vec<[f32; 2]>,
}

impl SceneItem {
    /// `true`, wenn das Item ein einzelner Marker ist.
    pub fn is_marker(&self) -> bool {
        self.single.is_some()
    }
}

/// Read-only Daten für einen Frame der Kartenansicht.
#[derive(Debug, Clone)]
pub struct MapScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Sichtbare Items, Lieu vor Action (Action wird obenauf gezeichnet)
    pub items: Vec<SceneItem>,
    /// Marker ohne gültige Position (werden nicht gezeichnet)
    pub unplaceable_count: usize,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ViewerOptions,
}

impl MapScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}
