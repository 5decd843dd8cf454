//! Schwebender Filter oben links: zwei Kategorie-Checkboxen, einklappbar.

use crate::app::{AppIntent, AppState};
use crate::core::Category;

/// Beschriftung des Umschalt-Buttons je nach Zustand.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "🔽 Filtres"
    } else {
        "▶ Filtres"
    }
}

/// Rendert das Filterfenster und gibt erzeugte Events zurück.
pub fn render_filter_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Window::new("filters")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 40.0])
        .show(ctx, |ui| {
            if ui
                .button(toggle_label(state.ui.filters_expanded))
                .clicked()
            {
                events.push(AppIntent::FilterPanelToggleRequested);
            }

            if !state.ui.filters_expanded {
                return;
            }

            ui.separator();
            for category in Category::ALL {
                let mut checked = state.filter.is_checked(category);
                let color = super::map_view::to_color32(state.options.category_color(category));
                ui.horizontal(|ui| {
                    let response = ui.checkbox(&mut checked, category.label());
                    ui.label(egui::RichText::new("●").color(color));
                    if response.changed() {
                        events.push(AppIntent::FilterToggled { category, checked });
                    }
                });
            }
        });

    events
}
