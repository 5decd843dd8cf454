//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod detail_panel;
pub mod events;
pub mod filter;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod source;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Gruppen, Filter, Panel, View).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use detail_panel::{DetailPanel, PanelState};
pub use events::{AppCommand, AppIntent};
pub use filter::FilterState;
pub use render_scene::build as build_map_scene;
pub use source::{CsvSource, LoadError, LoadJob};
pub use state::{AppState, LoadSummary, UiState, ViewState};
