use crate::app::source::{CsvSource, LoadError};
use crate::core::{Category, DetailContent};
use crate::shared::ViewerOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Hintergrund-Abruf einer Quelle starten
    StartLoad { source: CsvSource },
    /// Abruf-Ergebnis übernehmen (parsen, Marker bauen, Gruppen füllen)
    ApplyFetchResult { result: Result<String, LoadError> },
    /// Anwendung beenden
    RequestExit,

    /// Checkbox-Wert einer Kategorie setzen
    SetFilter { category: Category, checked: bool },
    /// Sichtbarkeit beider Gruppen aus dem Filter neu ableiten
    SyncGroupVisibility,
    /// Filterinhalt auf-/zuklappen
    ToggleFilterPanel,

    /// Detail-Panel mit Inhalt öffnen
    OpenDetail { content: DetailContent },
    /// Detail-Panel schließen
    CloseDetail,
    /// Detail-Panel ohne Inhaltsänderung öffnen
    ReopenDetail,

    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Start-Ausschnitt wiederherstellen
    ResetView,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        steps: f64,
        focus_world: Option<DVec2>,
    },
    /// Ausschnitt auf ein Welt-Rechteck einpassen
    ZoomToBounds { min: DVec2, max: DVec2 },
    /// Cluster-Mitglieder um den Schwerpunkt auffächern
    Spiderfy {
        category: Category,
        center: DVec2,
        marker_ids: Vec<u64>,
    },
    /// Aufgefächerten Cluster wieder zusammenklappen
    Unspiderfy,

    /// Bericht über fehlerhafte Zeilen anzeigen
    ShowLoadReport,
    /// Bericht schließen
    DismissLoadReport,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden
    ApplyOptions { options: ViewerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen speichern
    SaveOptions,
}
