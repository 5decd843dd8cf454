//! Top-Menü (File, View, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open CSV...").clicked() {
                    events.push(AppIntent::OpenCsvRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(!state.is_loading(), egui::Button::new("Reload"))
                    .clicked()
                {
                    events.push(AppIntent::ReloadRequested);
                    ui.close();
                }

                ui.separator();

                let has_failures = state
                    .last_load
                    .as_ref()
                    .is_some_and(|summary| !summary.failures.is_empty());
                if ui
                    .add_enabled(has_failures, egui::Button::new("Load Report..."))
                    .clicked()
                {
                    events.push(AppIntent::LoadReportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                if ui.button("Save Options").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset View").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let panel_label = if state.detail_panel.is_open() {
                    "Detail-Panel schließen"
                } else {
                    "Detail-Panel öffnen"
                };
                if ui.button(panel_label).clicked() {
                    events.push(if state.detail_panel.is_open() {
                        AppIntent::DetailCloseRequested
                    } else {
                        AppIntent::DetailOpenRequested
                    });
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("CSV Marker Map v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
