//! Kategorie eines Kartenpunkts (Lieu oder Action).

/// Geschlossene Aufzählung der beiden Punkt-Kategorien.
///
/// Jeder Punkt gehört genau einer Kategorie an. Die Kategorie bestimmt
/// Icon, Farbe und Ziel-Gruppe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Mobilisierter Ort (blaues Icon)
    #[default]
    Lieu,
    /// Aktion während des Tages (oranges Icon)
    Action,
}

/// Icon-Variante eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Blauer Marker
    Blue,
    /// Oranger Marker
    Orange,
}

impl Category {
    /// Alle Kategorien in Anzeige-Reihenfolge.
    pub const ALL: [Category; 2] = [Category::Lieu, Category::Action];

    /// Bildet die Typ-Spalte auf eine Kategorie ab.
    ///
    /// Nur ein (getrimmtes) `"action"` ergibt `Action`; fehlende, leere und
    /// unbekannte Werte ergeben `Lieu`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("action") => Category::Action,
            _ => Category::Lieu,
        }
    }

    /// Kurzbezeichner wie in der CSV-Datei.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Lieu => "lieu",
            Category::Action => "action",
        }
    }

    /// Beschriftung für Filter und Detail-Panel.
    pub fn label(self) -> &'static str {
        match self {
            Category::Lieu => "Lieu mobilisé",
            Category::Action => "Action durant la journée",
        }
    }

    /// Icon-Variante der Kategorie.
    pub fn icon(self) -> MarkerIcon {
        match self {
            Category::Lieu => MarkerIcon::Blue,
            Category::Action => MarkerIcon::Orange,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
