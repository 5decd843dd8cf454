//! Klick-Events: Einfach- und Doppel-Klick.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Einfach- und Doppelklick-Events im Viewport.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let world_pos =
                    screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
                events.push(AppIntent::MapDoubleClicked { world_pos });
            }
            self.panning = false;
        } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let world_pos =
                    screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
                events.push(AppIntent::MapClicked { world_pos });
            }
            self.panning = false;
        }
    }
}
