//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Zeigt den Bericht über fehlerhafte Zeilen.
pub fn show_load_report(state: &mut AppState) {
    state.ui.show_load_report = true;
}

/// Schließt den Ladebericht.
pub fn dismiss_load_report(state: &mut AppState) {
    state.ui.show_load_report = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) {
    use_cases::options::apply(state, options);
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    use_cases::options::reset(state);
}

/// Persistiert die Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::save(state)?;
    state.ui.status_message = Some("Optionen gespeichert".to_string());
    Ok(())
}
