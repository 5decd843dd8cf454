//! Handler für die Kategorie-Filter.

use crate::app::filter;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Category;

/// Setzt den Checkbox-Wert einer Kategorie.
pub fn set_filter(state: &mut AppState, category: Category, checked: bool) {
    state.filter.set(category, checked);
}

/// Leitet die Sichtbarkeit beider Gruppen neu aus dem Filter ab.
pub fn sync_visibility(state: &mut AppState) {
    filter::sync_visibility(&state.filter, &mut state.layers);
    if use_cases::spider::active(state).is_none() {
        use_cases::spider::collapse(state);
    }
}

/// Klappt den Filterinhalt auf bzw. zu.
pub fn toggle_panel(state: &mut AppState) {
    state.ui.filters_expanded = !state.ui.filters_expanded;
}
