//! Steuer-Panel: Kettenaufbau, Regler, Zielwinkel und Trajektorien-Steuerung.

use super::options_dialog::show_options_section;
use crate::app::{AppIntent, AppState};

/// Rendert das Steuer-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_chain = state.chain.is_some();
    let editable = has_chain && !state.is_animating();

    egui::SidePanel::left("control_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Kette");
                render_chain_buttons(ui, state, editable, &mut events);

                ui.separator();
                ui.heading("Regler");
                render_sliders(ui, state, editable, &mut events);

                ui.separator();
                ui.heading("Gelenke");
                render_joint_list(ui, state, editable, &mut events);

                ui.separator();
                ui.heading("Trajektorie");
                render_trajectory_controls(ui, state, has_chain, &mut events);

                ui.separator();
                events.extend(show_options_section(ui, state));
            });
        });

    events
}

fn render_chain_buttons(
    ui: &mut egui::Ui,
    state: &AppState,
    editable: bool,
    events: &mut Vec<AppIntent>,
) {
    ui.horizontal(|ui| {
        let can_add = editable && state.joint_template.is_some();
        if ui
            .add_enabled(can_add, egui::Button::new("Gelenk hinzufügen"))
            .clicked()
        {
            events.push(AppIntent::AddJointRequested);
        }
    });

    ui.horizontal(|ui| {
        ui.label(format!("Länge: {}", state.ui.length_display));
        if ui
            .add_enabled(editable, egui::Button::new("＋"))
            .on_hover_text("Endgelenk verlängern")
            .clicked()
        {
            events.push(AppIntent::IncreaseLengthRequested);
        }
        if ui
            .add_enabled(
                editable && state.can_decrease_length(),
                egui::Button::new("－"),
            )
            .on_hover_text("Letzte Verlängerung zurücknehmen")
            .clicked()
        {
            events.push(AppIntent::DecreaseLengthRequested);
        }
    });

    ui.horizontal(|ui| {
        ui.label(format!("Rotation: {}°", state.ui.rotation_display));
        let can_step = editable && state.joint_count() >= 2;
        if ui
            .add_enabled(can_step, egui::Button::new("⟲"))
            .on_hover_text("Rotationsschritt rückwärts")
            .clicked()
        {
            events.push(AppIntent::RotateStepBackwardRequested);
        }
        if ui
            .add_enabled(can_step, egui::Button::new("⟳"))
            .on_hover_text("Rotationsschritt vorwärts")
            .clicked()
        {
            events.push(AppIntent::RotateStepForwardRequested);
        }
    });
}

fn render_sliders(
    ui: &mut egui::Ui,
    state: &AppState,
    editable: bool,
    events: &mut Vec<AppIntent>,
) {
    let has_selection = state
        .chain
        .as_ref()
        .and_then(|chain| state.selection.selected_in(chain))
        .is_some();
    let enabled = editable && has_selection;

    let [t_min, t_max] = state.options.translation_range;
    let mut translation = state.manipulator.translation_value;
    if ui
        .add_enabled(
            enabled,
            egui::Slider::new(&mut translation, t_min.min(t_max)..=t_max.max(t_min))
                .text("Translation"),
        )
        .changed()
    {
        events.push(AppIntent::TranslationControlChanged { value: translation });
    }

    let [r_min, r_max] = state.options.rotation_range;
    let mut rotation = state.manipulator.rotation_value;
    if ui
        .add_enabled(
            enabled,
            egui::Slider::new(&mut rotation, r_min.min(r_max)..=r_max.max(r_min)).text("Rotation"),
        )
        .changed()
    {
        events.push(AppIntent::RotationControlChanged { value: rotation });
    }

    if !has_selection {
        ui.weak("Gelenk auswählen, um die Regler zu nutzen");
    }
}

fn render_joint_list(
    ui: &mut egui::Ui,
    state: &AppState,
    editable: bool,
    events: &mut Vec<AppIntent>,
) {
    let Some(chain) = state.chain.as_ref() else {
        ui.label("Basis noch nicht platziert");
        return;
    };

    egui::Grid::new("joint_grid")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Gelenk");
            ui.strong("Winkel");
            ui.strong("Ziel (°)");
            ui.end_row();

            for joint in chain.joints() {
                let selected = state.selection.selected_index == Some(joint.index);
                if ui.selectable_label(selected, &joint.label).clicked() {
                    events.push(AppIntent::JointClicked { index: joint.index });
                }
                ui.label(format!("{:.1}", joint.angle_deg));

                let mut text = joint.target_input.clone();
                let response = ui.add_enabled(
                    editable,
                    egui::TextEdit::singleline(&mut text).desired_width(60.0),
                );
                if response.changed() {
                    events.push(AppIntent::TargetAngleEdited {
                        index: joint.index,
                        text,
                    });
                }
                ui.end_row();
            }
        });

    if state.selection.selected_index.is_some() && ui.button("Auswahl aufheben").clicked() {
        events.push(AppIntent::SelectionClearRequested);
    }
}

fn render_trajectory_controls(
    ui: &mut egui::Ui,
    state: &AppState,
    has_chain: bool,
    events: &mut Vec<AppIntent>,
) {
    let animating = state.is_animating();

    ui.horizontal(|ui| {
        ui.label("Dauer (s):");
        let mut text = state.ui.duration_input.clone();
        let response = ui.add_enabled(
            !animating,
            egui::TextEdit::singleline(&mut text)
                .hint_text(format!("{}", state.options.default_duration))
                .desired_width(60.0),
        );
        if response.changed() {
            events.push(AppIntent::DurationEdited { text });
        }
    });

    let mut coordinated = state.ui.coordinated;
    if ui
        .add_enabled(
            !animating,
            egui::Checkbox::new(&mut coordinated, "Koordiniert (alle Gelenke gleichzeitig)"),
        )
        .changed()
    {
        events.push(AppIntent::CoordinatedModeToggled { coordinated });
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(has_chain && !animating, egui::Button::new("Done"))
            .clicked()
        {
            events.push(AppIntent::TrajectoryDoneRequested);
        }
        if ui
            .add_enabled(has_chain, egui::Button::new("Reset"))
            .clicked()
        {
            events.push(AppIntent::TrajectoryResetRequested);
        }
        if ui
            .add_enabled(animating, egui::Button::new("Abbrechen"))
            .clicked()
        {
            events.push(AppIntent::TrajectoryCancelRequested);
        }
    });

    if let Some(task) = state.animation.active() {
        ui.add(egui::ProgressBar::new(task.progress()).show_percentage());
    }
}
