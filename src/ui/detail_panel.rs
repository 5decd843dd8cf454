//! Detail-Panel (rechte Seitenleiste) für den angeklickten Punkt oder Ladefehler.

use crate::app::{AppIntent, AppState};
use crate::core::DetailContent;

/// Rendert das Detail-Panel bzw. den Öffnen-Button und gibt Events zurück.
pub fn render_detail_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.detail_panel.is_open() {
        // Kleiner Button zum erneuten Öffnen, nur wenn es Inhalt gibt
        if state.detail_panel.content().is_some() {
            egui::Area::new(egui::Id::new("detail_open_button"))
                .anchor(egui::Align2::RIGHT_TOP, [-10.0, 40.0])
                .show(ctx, |ui| {
                    if ui.button("ℹ Détails").clicked() {
                        events.push(AppIntent::DetailOpenRequested);
                    }
                });
        }
        return events;
    }

    egui::SidePanel::right("detail_panel")
        .default_width(280.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::DetailCloseRequested);
                    }
                });
            });

            match state.detail_panel.content() {
                Some(DetailContent::Point {
                    title,
                    category,
                    description_lines,
                }) => {
                    ui.heading(title.as_str());
                    let color =
                        super::map_view::to_color32(state.options.category_color(*category));
                    ui.label(egui::RichText::new(category.label()).color(color).italics());
                    ui.separator();

                    for line in description_lines {
                        ui.label(line.as_str());
                    }

                    if !state.options.info_link_url.is_empty() {
                        ui.separator();
                        ui.hyperlink_to(
                            state.options.info_link_text.as_str(),
                            &state.options.info_link_url,
                        );
                    }
                }
                Some(DetailContent::Error { message }) => {
                    ui.label(egui::RichText::new(message).color(egui::Color32::LIGHT_RED));
                }
                None => {
                    ui.label("Cliquez sur un point pour afficher ses détails.");
                }
            }
        });

    events
}
