//! Optionen-Dialog für Quelle, Ausschnitt, Cluster und Marker-Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Datenquelle ─────────────────────────────────
                    ui.collapsing("Datenquelle", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("CSV (Pfad/URL):");
                            changed |= ui.text_edit_singleline(&mut opts.csv_source).changed();
                        });
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Minimaler Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.min_zoom)
                                        .range(0.0..=opts.max_zoom)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Maximaler Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.max_zoom)
                                        .range(opts.min_zoom..=19.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.zoom_step)
                                        .range(0.25..=3.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.scroll_zoom_step)
                                        .range(0.05..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.double_click_zoom, "Doppelklick zoomt")
                            .changed();
                    });

                    // ── Cluster ─────────────────────────────────────
                    ui.collapsing("Cluster", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius Lieu (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.cluster_radius_lieu_px)
                                        .range(0.0..=80.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Radius Action (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.cluster_radius_action_px)
                                        .range(0.0..=80.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_radius_px)
                                        .range(2.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_radius_px)
                                        .range(4.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Lieu:", &mut opts.color_lieu);
                        changed |= color_edit(ui, "Action:", &mut opts.color_action);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
