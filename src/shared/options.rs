//! Zentrale Konfiguration der Marker-Karte.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{Category, GeoBounds};

// ── Datenquelle ─────────────────────────────────────────────────────

/// Standard-Quelle der Marker-Daten (Pfad oder URL).
pub const CSV_SOURCE: &str = "markers.csv";

// ── Kartenausschnitt ────────────────────────────────────────────────

/// Start-Mittelpunkt `[lat, lng]` (Kanton Waadt).
pub const INITIAL_CENTER: [f64; 2] = [46.55, 6.75];
/// Start-Zoomstufe.
pub const INITIAL_ZOOM: f64 = 9.0;
/// Minimale Zoomstufe.
pub const MIN_ZOOM: f64 = 7.0;
/// Maximale Zoomstufe.
pub const MAX_ZOOM: f64 = 15.0;
/// Begrenzung des Kartenausschnitts `[[lat, lng], [lat, lng]]`.
pub const MAX_BOUNDS: [[f64; 2]; 2] = [[46.0, 6.0], [47.5, 7.5]];
/// Zoom-Schritt bei Menü-Buttons / Shortcuts (Zoomstufen).
pub const ZOOM_STEP: f64 = 1.0;
/// Zoom-Schritt pro Mausrad-Raste (Zoomstufen).
pub const SCROLL_ZOOM_STEP: f64 = 0.25;

// ── Cluster ─────────────────────────────────────────────────────────

/// Cluster-Radius der Lieu-Gruppe in Screen-Pixeln.
pub const CLUSTER_RADIUS_LIEU_PX: f32 = 10.0;
/// Cluster-Radius der Action-Gruppe in Screen-Pixeln.
pub const CLUSTER_RADIUS_ACTION_PX: f32 = 2.0;
/// Ab mehr als dieser Anzahl ist ein Cluster "medium".
pub const CLUSTER_MEDIUM_THRESHOLD: usize = 10;
/// Ab mehr als dieser Anzahl ist ein Cluster "large".
pub const CLUSTER_LARGE_THRESHOLD: usize = 50;

// ── Marker-Rendering ───────────────────────────────────────────────

/// Farbe der Lieu-Marker (RGBA: #2196F3).
pub const COLOR_LIEU: [f32; 4] = [0.129, 0.588, 0.953, 1.0];
/// Farbe der Action-Marker (RGBA: #ff8c00).
pub const COLOR_ACTION: [f32; 4] = [1.0, 0.549, 0.0, 1.0];
/// Marker-Radius in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 7.0;
/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;

// ── Detail-Panel ───────────────────────────────────────────────────

/// Text des Info-Links unter jedem Detail.
pub const INFO_LINK_TEXT: &str = "Retrouvez toutes les informations du SSP sur la mobilisation contre les coupes budgétaires en suivant ce lien.";
/// Ziel des Info-Links.
pub const INFO_LINK_URL: &str = "https://vaud.ssp-vpod.ch/themes/pour-la-survie-des-services-publics-et-parapublics/lad-du-ssp-vote-une-resolution-de-lutte-contre-les-mesures-dausterite/";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `csv_marker_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    // ── Datenquelle ─────────────────────────────────────────────
    /// CSV-Quelle, die beim Start geladen wird
    pub csv_source: String,

    // ── Kartenausschnitt ────────────────────────────────────────
    /// Start-Mittelpunkt `[lat, lng]`
    pub initial_center: [f64; 2],
    /// Start-Zoomstufe
    pub initial_zoom: f64,
    /// Minimale Zoomstufe
    pub min_zoom: f64,
    /// Maximale Zoomstufe
    pub max_zoom: f64,
    /// Begrenzung des Ausschnitts (zwei Ecken `[lat, lng]`)
    pub max_bounds: [[f64; 2]; 2],
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Zoom-Schritt pro Mausrad-Raste
    #[serde(default = "default_scroll_zoom_step")]
    pub scroll_zoom_step: f64,
    /// Doppelklick zoomt hinein
    #[serde(default)]
    pub double_click_zoom: bool,

    // ── Cluster ─────────────────────────────────────────────────
    /// Cluster-Radius Lieu (Pixel)
    pub cluster_radius_lieu_px: f32,
    /// Cluster-Radius Action (Pixel)
    pub cluster_radius_action_px: f32,
    /// Schwelle für mittlere Cluster
    pub cluster_medium_threshold: usize,
    /// Schwelle für große Cluster
    pub cluster_large_threshold: usize,

    // ── Marker ──────────────────────────────────────────────────
    /// Farbe Lieu (RGBA)
    pub color_lieu: [f32; 4],
    /// Farbe Action (RGBA)
    pub color_action: [f32; 4],
    /// Marker-Radius (Pixel)
    pub marker_radius_px: f32,
    /// Pick-Radius für Klicks (Pixel)
    pub pick_radius_px: f32,

    // ── Detail-Panel ────────────────────────────────────────────
    /// Text des Info-Links
    #[serde(default = "default_info_link_text")]
    pub info_link_text: String,
    /// URL des Info-Links (leer = kein Link)
    #[serde(default = "default_info_link_url")]
    pub info_link_url: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            csv_source: CSV_SOURCE.to_string(),

            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            max_bounds: MAX_BOUNDS,
            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            double_click_zoom: false,

            cluster_radius_lieu_px: CLUSTER_RADIUS_LIEU_PX,
            cluster_radius_action_px: CLUSTER_RADIUS_ACTION_PX,
            cluster_medium_threshold: CLUSTER_MEDIUM_THRESHOLD,
            cluster_large_threshold: CLUSTER_LARGE_THRESHOLD,

            color_lieu: COLOR_LIEU,
            color_action: COLOR_ACTION,
            marker_radius_px: MARKER_RADIUS_PX,
            pick_radius_px: PICK_RADIUS_PX,

            info_link_text: INFO_LINK_TEXT.to_string(),
            info_link_url: INFO_LINK_URL.to_string(),
        }
    }
}

/// Serde-Default für `zoom_step` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_zoom_step() -> f64 {
    ZOOM_STEP
}

fn default_scroll_zoom_step() -> f64 {
    SCROLL_ZOOM_STEP
}

fn default_info_link_text() -> String {
    INFO_LINK_TEXT.to_string()
}

fn default_info_link_url() -> String {
    INFO_LINK_URL.to_string()
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("csv_marker_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("csv_marker_map.toml")
    }

    /// Begrenzung des Kartenausschnitts.
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::new(self.max_bounds[0], self.max_bounds[1])
    }

    /// Cluster-Radius einer Kategorie in Pixeln.
    pub fn cluster_radius_px(&self, category: Category) -> f32 {
        match category {
            Category::Lieu => self.cluster_radius_lieu_px,
            Category::Action => self.cluster_radius_action_px,
        }
    }

    /// Marker-Farbe einer Kategorie.
    pub fn category_color(&self, category: Category) -> [f32; 4] {
        match category {
            Category::Lieu => self.color_lieu,
            Category::Action => self.color_action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = ViewerOptions::default();
        options.csv_source = "https://example.org/markers.csv".into();
        options.cluster_radius_action_px = 4.0;

        let text = toml::to_string_pretty(&options).expect("Serialisieren");
        let back: ViewerOptions = toml::from_str(&text).expect("Deserialisieren");
        assert_eq!(back, options);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let mut table: toml::Table = toml::from_str(
            &toml::to_string(&ViewerOptions::default()).expect("Serialisieren"),
        )
        .expect("Tabelle");
        table.remove("zoom_step");
        table.remove("info_link_url");
        table.remove("double_click_zoom");

        let options: ViewerOptions =
            toml::from_str(&toml::to_string(&table).expect("Tabelle serialisieren"))
                .expect("Deserialisieren");
        assert_eq!(options.zoom_step, ZOOM_STEP);
        assert_eq!(options.info_link_url, INFO_LINK_URL);
        assert!(!options.double_click_zoom);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("csv_marker_map_broken_options.toml");
        std::fs::write(&path, "min_zoom = \"sieben\"").expect("Testdatei schreiben");
        assert_eq!(ViewerOptions::load_from_file(&path), ViewerOptions::default());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn radius_and_color_per_category() {
        let options = ViewerOptions::default();
        assert_eq!(options.cluster_radius_px(Category::Lieu), 10.0);
        assert_eq!(options.cluster_radius_px(Category::Action), 2.0);
        assert_eq!(options.category_color(Category::Action), COLOR_ACTION);
    }
}
