//! Mapping von UI-Intents auf mutierende App-Commands.

use super::source::CsvSource;
use super::use_cases::picking::{self, PickResult};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenCsvRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::CsvFileSelected { path } => vec![AppCommand::StartLoad {
            source: CsvSource::from_locator(&path),
        }],
        AppIntent::LoadSourceRequested { locator } => vec![AppCommand::StartLoad {
            source: CsvSource::from_locator(&locator),
        }],
        AppIntent::ReloadRequested => {
            let locator = state
                .ui
                .current_source
                .clone()
                .unwrap_or_else(|| state.options.csv_source.clone());
            vec![AppCommand::StartLoad {
                source: CsvSource::from_locator(&locator),
            }]
        }
        AppIntent::CsvFetched { result } => vec![AppCommand::ApplyFetchResult { result }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::FilterToggled { category, checked } => vec![
            AppCommand::SetFilter { category, checked },
            AppCommand::SyncGroupVisibility,
        ],
        AppIntent::FilterPanelToggleRequested => vec![AppCommand::ToggleFilterPanel],

        AppIntent::MapClicked { world_pos } => match picking::pick_at(state, world_pos) {
            Some(PickResult::Marker(marker_id)) => state
                .layers
                .find_marker(marker_id)
                .map(|marker| AppCommand::OpenDetail {
                    content: marker.detail_content(),
                })
                .into_iter()
                .collect(),
            Some(PickResult::Cluster {
                category,
                center,
                marker_ids,
                min,
                max,
            }) => {
                // Auf maximaler Zoomstufe oder bei deckungsgleichen Markern
                // trennt Zoomen den Cluster nicht mehr
                if min == max || state.view.camera.zoom >= state.options.max_zoom {
                    vec![AppCommand::Spiderfy {
                        category,
                        center,
                        marker_ids,
                    }]
                } else {
                    vec![AppCommand::ZoomToBounds { min, max }]
                }
            }
            None if state.view.spider.is_some() => vec![AppCommand::Unspiderfy],
            None => Vec::new(),
        },
        AppIntent::MapDoubleClicked { world_pos } => {
            if state.options.double_click_zoom {
                vec![AppCommand::ZoomCamera {
                    steps: state.options.zoom_step,
                    focus_world: Some(world_pos),
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::DetailCloseRequested => vec![AppCommand::CloseDetail],
        AppIntent::DetailOpenRequested => vec![AppCommand::ReopenDetail],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { steps, focus_world } => {
            vec![AppCommand::ZoomCamera { steps, focus_world }]
        }

        AppIntent::LoadReportRequested => vec![AppCommand::ShowLoadReport],
        AppIntent::LoadReportDismissed => vec![AppCommand::DismissLoadReport],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}
