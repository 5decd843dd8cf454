//! Use-Cases für das Laden der CSV-Daten in die Marker-Gruppen.

use super::spider;
use crate::app::filter;
use crate::app::source::{CsvSource, LoadError, LoadJob};
use crate::app::state::LoadSummary;
use crate::app::AppState;
use crate::core::{Category, DetailContent, Marker};
use crate::csv::parse_csv_document;

/// Für den Nutzer sichtbare Meldung bei einem gescheiterten Ladevorgang.
pub const LOAD_ERROR_MESSAGE: &str = "Erreur : impossible de charger les points de repère.";

/// Öffnet den Datei-Dialog (wird im nächsten Frame von der UI verarbeitet).
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Startet den Hintergrund-Abruf einer Quelle.
///
/// Läuft bereits ein Abruf, wird die Anfrage verworfen.
pub fn start_load(state: &mut AppState, source: CsvSource) {
    if let Some(job) = &state.pending_load {
        log::warn!(
            "Laden von {} ignoriert: {} wird noch geladen",
            source,
            job.source()
        );
        return;
    }

    log::info!("Lade Marker aus: {}", source);
    state.ui.current_source = Some(source.to_string());
    state.ui.status_message = None;
    state.pending_load = Some(LoadJob::spawn(source));
}

/// Übernimmt das Ergebnis eines Abrufs in den AppState.
pub fn apply_fetch_result(state: &mut AppState, result: Result<String, LoadError>) {
    match result {
        Ok(text) => apply_csv_text(state, &text),
        Err(error) => apply_load_error(state, error),
    }
}

/// Parsed den CSV-Text, baut die Marker und befüllt beide Gruppen neu.
pub fn apply_csv_text(state: &mut AppState, text: &str) {
    let parsed = parse_csv_document(text);

    state.layers.clear();
    spider::collapse(state);
    let mut unplaceable_count = 0;
    for (index, line) in parsed.records.into_iter().enumerate() {
        let category = line.record.category;
        let marker = Marker::from_record(index as u64 + 1, line.record);
        if !marker.is_placeable() {
            log::warn!(
                "Zeile {}: \"{}\" hat keine gültigen Koordinaten und wird nicht angezeigt",
                line.line_number,
                marker.tooltip()
            );
            unplaceable_count += 1;
        }
        state.layers.add_to_group(marker, category);
    }

    for failure in &parsed.failures {
        log::warn!("{}", failure);
    }

    filter::sync_visibility(&state.filter, &mut state.layers);

    for category in Category::ALL {
        log::info!(
            "{} Marker \"{}\" geladen",
            state.layers.count(category),
            category.tag()
        );
    }

    let summary = LoadSummary {
        source: state.ui.current_source.clone().unwrap_or_default(),
        lieu_count: state.layers.count(Category::Lieu),
        action_count: state.layers.count(Category::Action),
        unplaceable_count,
        failures: parsed.failures,
    };

    state.ui.status_message = if summary.failures.is_empty() {
        None
    } else {
        Some(format!(
            "{} fehlerhafte Zeile(n) übersprungen",
            summary.failures.len()
        ))
    };
    state.ui.show_load_report = !summary.failures.is_empty();
    state.last_load = Some(summary);
    state.last_load_error = None;
}

/// Meldet einen gescheiterten Ladevorgang. Bestehende Marker bleiben erhalten.
///
/// Die einzige sichtbare Meldung steht im Detail-Panel.
pub fn apply_load_error(state: &mut AppState, error: LoadError) {
    log::error!("Fehler beim Laden der Marker: {}", error);
    state.detail_panel.open_with(DetailContent::Error {
        message: format!("{} ({})", LOAD_ERROR_MESSAGE, error),
    });
    state.ui.status_message = None;
    state.last_load_error = Some(error);
}
