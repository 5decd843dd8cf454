use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        let mut dialog = rfd::FileDialog::new().add_filter("CSV", &["csv", "txt"]);
        if let Some(dir) = ui_state
            .current_source
            .as_deref()
            .map(std::path::Path::new)
            .and_then(|p| p.parent())
            .filter(|p| p.is_dir())
        {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            events.push(AppIntent::CsvFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
