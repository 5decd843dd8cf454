//! Application State — zentrale Datenhaltung.

use super::detail_panel::DetailPanel;
use super::filter::FilterState;
use super::source::{LoadError, LoadJob};
use super::CommandLog;
use crate::core::{Camera2D, Category, MarkerLayers, Spider};
use crate::csv::LineFailure;
use crate::shared::ViewerOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kamera für die 2D-Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Aufgefächerter Cluster (verfällt bei Zoom-Wechsel)
    pub spider: Option<Spider>,
}

impl ViewState {
    /// Erstellt den Start-Ausschnitt aus den Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            camera: Camera2D::centered_on(
                options.initial_center[0],
                options.initial_center[1],
                options.initial_zoom,
            ),
            viewport_size: [0.0, 0.0],
            spider: None,
        }
    }
}

/// Zusammenfassung des letzten erfolgreichen Ladevorgangs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    /// Geladene Quelle
    pub source: String,
    /// Anzahl Lieu-Marker
    pub lieu_count: usize,
    /// Anzahl Action-Marker
    pub action_count: usize,
    /// Marker ohne gültige Koordinaten
    pub unplaceable_count: usize,
    /// Übersprungene, fehlerhafte Zeilen
    pub failures: Vec<LineFailure>,
}

impl LoadSummary {
    /// Marker-Anzahl einer Kategorie.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Lieu => self.lieu_count,
            Category::Action => self.action_count,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog angezeigt werden soll
    pub show_file_dialog: bool,
    /// Ob der Filterinhalt aufgeklappt ist
    pub filters_expanded: bool,
    /// Ob der Bericht über fehlerhafte Zeilen angezeigt wird
    pub show_load_report: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Zuletzt geladene bzw. angeforderte Quelle
    pub current_source: Option<String>,
    /// Optionale Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Filter aufgeklappt).
    pub fn new() -> Self {
        Self {
            filters_expanded: true,
            ..Default::default()
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die beiden Marker-Gruppen
    pub layers: MarkerLayers,
    /// Checkbox-Zustand der Filter
    pub filter: FilterState,
    /// Detail-Panel (Seitenleiste)
    pub detail_panel: DetailPanel,
    /// View-Zustand
    pub view: ViewState,
    /// UI-Zustand
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Laufender Ladejob (höchstens einer)
    pub pending_load: Option<LoadJob>,
    /// Ergebnis des letzten erfolgreichen Ladevorgangs
    pub last_load: Option<LoadSummary>,
    /// Fehler des letzten gescheiterten Ladevorgangs
    pub last_load_error: Option<LoadError>,
    /// Command-Log
    pub command_log: CommandLog,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen AppState mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen neuen AppState mit den übergebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            layers: MarkerLayers::new(),
            filter: FilterState::default(),
            detail_panel: DetailPanel::new(),
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            options,
            pending_load: None,
            last_load: None,
            last_load_error: None,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// `true`, solange ein Ladejob läuft.
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Holt das Ergebnis eines fertigen Ladejobs ab (nicht blockierend).
    pub fn poll_pending_load(&mut self) -> Option<Result<String, LoadError>> {
        let result = self.pending_load.as_ref()?.try_take()?;
        self.pending_load = None;
        Some(result)
    }
}
