//! CSV Marker Map.
//!
//! Lädt Punkte aus einer CSV-Datei (Pfad oder URL) und zeigt sie als
//! filterbare, geclusterte Marker auf einer Karte mit Detail-Panel.

use csv_marker_map::{ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("CSV Marker Map v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionaler erster Parameter: CSV-Quelle (Pfad oder URL)
        let source_override = std::env::args().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("CSV Marker Map"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "CSV Marker Map",
            options,
            Box::new(move |_cc| Ok(Box::new(MarkerMapApp::new(source_override)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MarkerMapApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl MarkerMapApp {
    fn new(source_override: Option<String>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let mut viewer_options = ViewerOptions::load_from_file(&config_path);
        if let Some(source) = source_override {
            viewer_options.csv_source = source;
        }

        let locator = viewer_options.csv_source.clone();
        let mut app = Self {
            state: AppState::with_options(viewer_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        };

        // Erster Ladevorgang beim Start
        app.process_events(vec![AppIntent::LoadSourceRequested { locator }]);
        app
    }
}

impl eframe::App for MarkerMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_load_events();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MarkerMapApp {
    /// Holt ein fertiges Abruf-Ergebnis vom Worker-Thread ab.
    fn collect_load_events(&mut self) -> Vec<AppIntent> {
        self.state
            .poll_pending_load()
            .map(|result| AppIntent::CsvFetched { result })
            .into_iter()
            .collect()
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_detail_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_load_report(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                let scene = self.controller.build_map_scene(&self.state, viewport_size);
                ui::paint_map(ui.painter(), rect, &scene, response.hover_pos());
                ui::show_hover_tooltip(&response, &scene);
            });

        // Filter schwebt über der Karte
        events.extend(ui::render_filter_panel(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.is_loading() {
            // Worker-Ergebnis im nächsten Frame abholen
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_load_report
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
