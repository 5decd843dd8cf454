//! CSV Marker Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod csv;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CsvSource, DetailPanel, FilterState,
    LoadError, LoadSummary, PanelState, UiState, ViewState,
};
pub use core::{
    Camera2D, Category, Cluster, ClusterSize, DetailContent, GeoBounds, Marker, MarkerGroup,
    MarkerIcon, MarkerLayers, PointRecord, SpatialIndex, SpatialMatch,
};
pub use csv::{parse_csv_document, parse_csv_line, CsvLineError, LineFailure, ParsedCsv};
pub use shared::{MapScene, ViewerOptions};
