//! Optionen-Bereich für Kettenparameter, Trajektorie und Darstellung.

use super::color::{from_color32, to_color32};
use crate::app::{AppIntent, AppState};

/// Zeigt den aufklappbaren Optionen-Bereich und gibt erzeugte Events zurück.
pub fn show_options_section(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    ui.collapsing("Optionen", |ui| {
        // ── Kette ───────────────────────────────────────
        ui.collapsing("Kette", |ui| {
            changed |= drag_row(ui, "Gelenkabstand:", &mut opts.joint_spacing, 0.01..=5.0, 0.01);
            changed |= drag_row(ui, "Längenschritt:", &mut opts.length_step, 0.01..=5.0, 0.01);
            changed |= drag_row(ui, "Maximale Länge:", &mut opts.max_length, 0.1..=100.0, 0.1);
            ui.horizontal(|ui| {
                ui.label("Undo-Tiefe:");
                changed |= ui
                    .add(egui::DragValue::new(&mut opts.history_depth).range(1..=10_000))
                    .changed();
            });
        });

        // ── Rotation ────────────────────────────────────
        ui.collapsing("Rotation", |ui| {
            changed |= drag_row(
                ui,
                "Schrittweite (°):",
                &mut opts.rotation_step_deg,
                1.0..=180.0,
                1.0,
            );
            changed |= drag_row(
                ui,
                "Regler-Skala (°/Einheit):",
                &mut opts.rotation_control_scale,
                1.0..=360.0,
                1.0,
            );
        });

        // ── Trajektorie ─────────────────────────────────
        ui.collapsing("Trajektorie", |ui| {
            changed |= drag_row(
                ui,
                "Standard-Dauer (s):",
                &mut opts.default_duration,
                0.1..=60.0,
                0.1,
            );
            changed |= drag_row(ui, "Minimale Dauer (s):", &mut opts.min_duration, 0.01..=10.0, 0.01);
            changed |= ui
                .checkbox(&mut opts.coordinated_default, "Standard: koordiniert")
                .changed();
        });

        // ── Darstellung ─────────────────────────────────
        ui.collapsing("Darstellung", |ui| {
            changed |= color_edit(ui, "Gelenkfarbe:", &mut opts.joint_color_default);
            changed |= color_edit(ui, "Selektiert:", &mut opts.joint_color_selected);
            changed |= color_edit(ui, "Pfad:", &mut opts.path_color);
            changed |= drag_row(ui, "Gelenkgröße:", &mut opts.joint_size, 0.005..=1.0, 0.005);
            changed |= drag_row(ui, "Pfadbreite (px):", &mut opts.path_thickness_px, 0.5..=20.0, 0.1);
            changed |= drag_row(ui, "Pick-Radius (px):", &mut opts.pick_radius_px, 1.0..=50.0, 0.5);
        });
    });

    if changed {
        events.push(AppIntent::OptionsApplied {
            options: Box::new(opts),
        });
    }

    events
}

fn drag_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = from_color32(c);
            changed = true;
        }
    });
    changed
}
