//! Datei-Dialoge und modale Fenster.

mod file_dialogs;
mod load_report;

pub use file_dialogs::handle_file_dialogs;
pub use load_report::show_load_report;
