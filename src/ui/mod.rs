//! UI-Komponenten: Menü, Filter, Detail-Panel, Karte, Input-Handling, Dialoge.

pub mod detail_panel;
pub mod dialogs;
pub mod filter_panel;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Keyboard-Shortcuts und Maus-Input sind in eigene Dateien extrahiert.
pub mod map_view;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use detail_panel::render_detail_panel;
pub use dialogs::{handle_file_dialogs, show_load_report};
pub use filter_panel::render_filter_panel;
pub use input::InputState;
pub use map_view::{paint_map, show_hover_tooltip};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
