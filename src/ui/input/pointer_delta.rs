//! Pointer-Delta-Verarbeitung: Kamera-Pan.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für den Kamera-Pan.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if ctx.response.drag_stopped() {
            self.panning = false;
        }

        let dragging = ctx.response.dragged_by(egui::PointerButton::Primary)
            || ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary);
        if !dragging {
            return;
        }
        self.panning = true;

        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel();
        events.push(AppIntent::CameraPan {
            delta: glam::DVec2::new(
                -pointer_delta.x as f64 * wpp,
                -pointer_delta.y as f64 * wpp,
            ),
        });
    }
}
