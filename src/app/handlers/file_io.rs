//! Handler für das Laden der CSV-Quelle.

use crate::app::source::{CsvSource, LoadError};
use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::load_markers::request_open(state);
}

/// Startet den Hintergrund-Abruf einer Quelle.
pub fn start_load(state: &mut AppState, source: CsvSource) {
    use_cases::load_markers::start_load(state, source);
}

/// Übernimmt das Ergebnis eines abgeschlossenen Abrufs.
pub fn apply_fetch_result(state: &mut AppState, result: Result<String, LoadError>) {
    use_cases::load_markers::apply_fetch_result(state, result);
}
