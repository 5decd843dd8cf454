//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::{geo, Category};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.is_loading() {
                ui.spinner();
                ui.label("Lade Marker...");
            } else if let Some(summary) = &state.last_load {
                ui.label(format!(
                    "{}: {} | {}: {}",
                    Category::Lieu.label(),
                    summary.count(Category::Lieu),
                    Category::Action.label(),
                    summary.count(Category::Action)
                ));

                if summary.unplaceable_count > 0 {
                    ui.separator();
                    ui.label(format!("Ohne Position: {}", summary.unplaceable_count));
                }
            } else {
                ui.label("Keine Marker geladen");
            }

            ui.separator();

            let (lat, lng) = geo::unproject(state.view.camera.position);
            ui.label(format!(
                "Zoom: {:.2} | Zentrum: ({:.4}, {:.4})",
                state.view.camera.zoom, lat, lng
            ));

            // Statusnachricht (z.B. fehlerhafte Zeilen)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(source) = &state.ui.current_source {
                    ui.label(source.as_str());
                }
            });
        });
    });
}
