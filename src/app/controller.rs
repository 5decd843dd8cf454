//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Laden ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::StartLoad { source } => handlers::file_io::start_load(state, source),
            AppCommand::ApplyFetchResult { result } => {
                handlers::file_io::apply_fetch_result(state, result)
            }

            // === Filter ===
            AppCommand::SetFilter { category, checked } => {
                handlers::filter::set_filter(state, category, checked)
            }
            AppCommand::SyncGroupVisibility => handlers::filter::sync_visibility(state),
            AppCommand::ToggleFilterPanel => handlers::filter::toggle_panel(state),

            // === Detail-Panel ===
            AppCommand::OpenDetail { content } => handlers::panel::open(state, content),
            AppCommand::CloseDetail => handlers::panel::close(state),
            AppCommand::ReopenDetail => handlers::panel::reopen(state),

            // === Kamera & Viewport ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { steps, focus_world } => {
                handlers::view::zoom_towards(state, steps, focus_world)
            }
            AppCommand::ZoomToBounds { min, max } => handlers::view::zoom_to_bounds(state, min, max),
            AppCommand::Spiderfy {
                category,
                center,
                marker_ids,
            } => handlers::view::spiderfy(state, category, center, &marker_ids),
            AppCommand::Unspiderfy => handlers::view::unspiderfy(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::ShowLoadReport => handlers::dialog::show_load_report(state),
            AppCommand::DismissLoadReport => handlers::dialog::dismiss_load_report(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
        }

        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen AppState.
    pub fn build_map_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> MapScene {
        render_scene::build(state, viewport_size)
    }
}
