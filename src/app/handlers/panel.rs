//! Handler für das Detail-Panel.

use crate::app::AppState;
use crate::core::DetailContent;

/// Öffnet das Panel mit neuem Inhalt.
pub fn open(state: &mut AppState, content: DetailContent) {
    state.detail_panel.open_with(content);
}

/// Schließt das Panel; der Inhalt bleibt erhalten.
pub fn close(state: &mut AppState) {
    state.detail_panel.close();
}

/// Öffnet das Panel erneut mit unverändertem Inhalt.
pub fn reopen(state: &mut AppState) {
    state.detail_panel.reopen();
}
