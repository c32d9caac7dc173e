//! Use-Cases: Endgelenk verlängern und Verlängerung zurücknehmen.

use crate::app::history::LengthStep;
use crate::app::state::format_length;
use crate::app::use_cases::manipulation::rebase_translation_baselines;
use crate::app::AppState;

/// Toleranz, ab der die kumulierte Länge als ausgeschöpft gilt.
const LENGTH_EPSILON: f32 = 1e-4;

/// Schiebt das effektive Endgelenk um `length_step` von seinem Vorgänger weg.
///
/// Die Position vor dem Schritt landet auf dem Undo-Stack. Ist die maximale
/// Länge erreicht oder ist das effektive Gelenk die Basis, passiert nichts.
pub fn increase_length(state: &mut AppState) {
    let Some(chain) = state.chain.as_mut() else {
        log::error!("Verlängern nicht möglich: keine Kette vorhanden");
        return;
    };

    if state.editor.current_length >= state.options.max_length - LENGTH_EPSILON {
        log::debug!("Maximale Länge {} erreicht", state.options.max_length);
        return;
    }

    let index = state.selection.effective_end_joint(chain);
    if index == 0 {
        log::debug!("Verlängern ignoriert: Basis hat keinen Vorgänger");
        return;
    }

    let (Some(previous), Some(joint)) = (chain.get(index - 1), chain.get(index)) else {
        return;
    };
    let current = joint.position;
    let direction = (current - previous.position)
        .try_normalize()
        .unwrap_or(state.editor.current_direction);

    state.editor.length_history.record(LengthStep {
        joint_index: index,
        previous_position: current,
    });
    chain.set_position(index, current + direction * state.options.length_step);

    state.editor.current_length = (state.editor.current_length + state.options.length_step)
        .clamp(0.0, state.options.max_length);
    state.ui.length_display = format_length(state.editor.current_length);

    rebase_translation_baselines(state);
    log::info!(
        "Gelenk {} verlängert, Länge {}",
        index,
        state.ui.length_display
    );
}

/// Nimmt die letzte Verlängerung zurück. Leerer Undo-Stack: nichts zu tun.
///
/// Die gemerkte Position geht an das aktuelle effektive Endgelenk, also an das
/// selektierte Gelenk oder sonst an das letzte.
pub fn decrease_length(state: &mut AppState) {
    let Some(chain) = state.chain.as_mut() else {
        log::error!("Verkürzen nicht möglich: keine Kette vorhanden");
        return;
    };

    let Some(step) = state.editor.length_history.pop() else {
        log::debug!("Verkürzen ignoriert: keine Verlängerung aufgezeichnet");
        return;
    };

    let index = state.selection.effective_end_joint(chain);
    if index != step.joint_index {
        log::debug!(
            "Verkürzen: Position von Gelenk {} geht an Gelenk {}",
            step.joint_index,
            index
        );
    }
    if !chain.set_position(index, step.previous_position) {
        log::warn!("Verkürzen: Gelenk {} existiert nicht", index);
        return;
    }

    state.editor.current_length = (state.editor.current_length - state.options.length_step)
        .clamp(0.0, state.options.max_length);
    state.ui.length_display = format_length(state.editor.current_length);

    rebase_translation_baselines(state);
    log::info!("Gelenk {} verkürzt, Länge {}", index, state.ui.length_display);
}
