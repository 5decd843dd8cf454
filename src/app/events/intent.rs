use crate::app::source::LoadError;
use crate::core::Category;
use crate::shared::ViewerOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// CSV-Datei öffnen (zeigt Dateidialog)
    OpenCsvRequested,
    /// Datei wurde im Dialog ausgewählt
    CsvFileSelected { path: String },
    /// Quelle (Pfad oder URL) laden
    LoadSourceRequested { locator: String },
    /// Zuletzt geladene Quelle erneut laden
    ReloadRequested,
    /// Hintergrund-Abruf ist fertig
    CsvFetched { result: Result<String, LoadError> },
    /// Anwendung beenden
    ExitRequested,

    /// Filter-Checkbox geändert
    FilterToggled { category: Category, checked: bool },
    /// Filterinhalt auf-/zuklappen
    FilterPanelToggleRequested,

    /// Klick in die Karte (Marker- oder Cluster-Pick)
    MapClicked { world_pos: DVec2 },
    /// Doppelklick in die Karte
    MapDoubleClicked { world_pos: DVec2 },
    /// Detail-Panel schließen
    DetailCloseRequested,
    /// Detail-Panel wieder öffnen (ohne Inhaltsänderung)
    DetailOpenRequested,

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Start-Ausschnitt wiederherstellen
    ResetViewRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (Delta in Zoomstufen, optional auf einen Fokuspunkt)
    CameraZoom {
        steps: f64,
        focus_world: Option<DVec2>,
    },

    /// Bericht über fehlerhafte Zeilen anzeigen
    LoadReportRequested,
    /// Bericht schließen
    LoadReportDismissed,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: ViewerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
}
