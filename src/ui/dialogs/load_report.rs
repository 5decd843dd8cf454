use crate::app::{AppIntent, AppState};

/// Zeigt die beim letzten Laden übersprungenen Zeilen.
pub fn show_load_report(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_load_report {
        return events;
    }
    let Some(summary) = &state.last_load else {
        return events;
    };

    let mut open = true;
    egui::Window::new("Ladebericht")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Quelle: {}", summary.source));
            ui.label(format!(
                "{} Zeile(n) konnten nicht gelesen werden:",
                summary.failures.len()
            ));
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(300.0)
                .show(ui, |ui| {
                    for failure in &summary.failures {
                        ui.label(failure.to_string());
                    }
                });

            ui.separator();
            if ui.button("OK").clicked() {
                events.push(AppIntent::LoadReportDismissed);
            }
        });

    if !open {
        events.push(AppIntent::LoadReportDismissed);
    }

    events
}
