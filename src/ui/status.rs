//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(chain) = &state.chain {
                ui.label(format!(
                    "Gelenke: {} | Gesamtlänge: {:.2}",
                    chain.len(),
                    chain.total_length()
                ));
            } else {
                ui.label("Basis nicht platziert");
            }

            ui.separator();

            ui.label(format!(
                "Verlängerung: {} | Rotation: {}°",
                state.ui.length_display, state.ui.rotation_display
            ));

            ui.separator();

            match state.selection.selected_index {
                Some(index) => ui.label(format!("Selektiert: Gelenk {}", index)),
                None => ui.label("Keine Selektion"),
            };

            ui.separator();

            if let Some(task) = state.animation.active() {
                let joint = task
                    .active_joint()
                    .map(|index| format!(" (Gelenk {})", index))
                    .unwrap_or_default();
                ui.label(format!(
                    "Animation: {:?}{} {:.0}%",
                    task.mode(),
                    joint,
                    task.progress() * 100.0
                ));
            } else {
                ui.label(format!(
                    "Modus: {}",
                    if state.ui.coordinated {
                        "koordiniert"
                    } else {
                        "sequenziell"
                    }
                ));
            }

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom));
        });
    });
}
