//! Use-Cases: Rotations-Regler und Rotationsschritte mit starrer Propagation.

use super::rebase_translation_baselines;
use crate::app::state::format_angle;
use crate::app::AppState;
use crate::core::kinematics::{axis_rotation, capture_offsets, propagate_rigid, wrap_degrees};
use crate::core::ChainModel;
use glam::Vec3;

/// Richtung eines Rotationsschritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// `+rotation_step_deg`
    Forward,
    /// `-rotation_step_deg`
    Backward,
}

impl StepDirection {
    fn sign(self) -> f32 {
        match self {
            StepDirection::Forward => 1.0,
            StepDirection::Backward => -1.0,
        }
    }
}

/// Setzt den Winkel eines Gelenks absolut und dreht alle Nachfolger starr mit.
///
/// Die Offsets der Nachfolger werden vor der Änderung erfasst und mit
/// `neu * alt⁻¹` gedreht. Gibt `false` bei ungültigem Index zurück.
pub fn apply_joint_angle(chain: &mut ChainModel, index: usize, angle_deg: f32, axis: Vec3) -> bool {
    let Some(joint) = chain.get(index) else {
        return false;
    };
    let old_rotation = joint.rotation;
    let angle_deg = wrap_degrees(angle_deg);
    let new_rotation = axis_rotation(axis, angle_deg);

    let offsets = capture_offsets(chain.joints(), index);
    let delta = new_rotation * old_rotation.inverse();

    chain.set_rotation(index, new_rotation, angle_deg);
    propagate_rigid(chain.joints_mut(), index, delta, &offsets);
    true
}

/// Wendet den Rotations-Regler auf das selektierte Gelenk an.
///
/// Winkel = `value * rotation_control_scale`, normiert auf `[0, 360)`.
pub fn set_rotation_value(state: &mut AppState, value: f32) {
    let value = state.options.clamp_rotation(value);

    let Some(chain) = state.chain.as_mut() else {
        log::error!("Rotation nicht möglich: keine Kette vorhanden");
        return;
    };
    let Some(selected) = state.selection.selected_in(chain) else {
        log::debug!("Rotation ignoriert: kein Gelenk selektiert");
        return;
    };

    let angle = wrap_degrees(value * state.options.rotation_control_scale);
    apply_joint_angle(chain, selected, angle, state.options.rotation_axis());

    state.manipulator.rotation_value = value;
    state.ui.rotation_display = format_angle(angle);
    rebase_translation_baselines(state);

    log::debug!("Rotation Gelenk {}: {:.1}°", selected, angle);
}

/// Dreht das effektive Endgelenk um einen Rotationsschritt.
///
/// Die neue Vorwärtsrichtung des Gelenks wird zur Wachstumsrichtung für
/// weitere Gelenke. Benötigt mindestens ein angehängtes Gelenk.
pub fn rotate_step(state: &mut AppState, direction: StepDirection) {
    let Some(chain) = state.chain.as_mut() else {
        log::error!("Rotationsschritt nicht möglich: keine Kette vorhanden");
        return;
    };
    if chain.len() < 2 {
        log::debug!("Rotationsschritt ignoriert: noch kein Gelenk angehängt");
        return;
    }

    let index = state.selection.effective_end_joint(chain);
    let Some(current_angle) = chain.get(index).map(|joint| joint.angle_deg) else {
        return;
    };
    let angle = wrap_degrees(current_angle + direction.sign() * state.options.rotation_step_deg);
    apply_joint_angle(chain, index, angle, state.options.rotation_axis());

    if let Some(joint) = chain.get(index) {
        state.editor.current_direction = joint.forward();
        state.ui.rotation_display = format_angle(joint.angle_deg);
    }
    rebase_translation_baselines(state);

    log::info!(
        "Gelenk {} gedreht auf {}°",
        index,
        state.ui.rotation_display
    );
}
