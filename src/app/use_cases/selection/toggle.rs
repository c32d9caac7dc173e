use crate::app::state::ManipulatorState;
use crate::app::AppState;
use crate::core::ChainModel;

/// Wählt ein Gelenk an oder ab.
///
/// Gleicher Index wie die aktuelle Selektion: abwählen und Originalfarbe
/// wiederherstellen. Sonst alte Selektion zurücksetzen, neue Farbe merken
/// und Selektionsfarbe setzen. Danach stehen beide Regler wieder auf 0.
pub fn toggle_selection(state: &mut AppState, index: usize) {
    let Some(chain) = state.chain.as_mut() else {
        log::error!("Selektion nicht möglich: keine Kette vorhanden");
        return;
    };
    if !chain.contains_index(index) {
        log::debug!("Selektion ignoriert: Gelenk {} existiert nicht", index);
        return;
    }

    let previous = state.selection.selected_index;
    restore_highlight(chain, previous, state.selection.original_color.take());
    state.selection.selected_index = None;

    if previous == Some(index) {
        log::info!("Gelenk {} abgewählt", index);
    } else if let Some(joint) = chain.get_mut(index) {
        state.selection.original_color = Some(joint.color);
        joint.color = state.options.joint_color_selected;
        state.selection.selected_index = Some(index);
        log::info!("Gelenk {} selektiert", index);
    }

    reset_controls(state);
}

/// Hebt die Selektion auf (falls vorhanden).
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected_index.is_none() {
        return;
    }
    if let Some(chain) = state.chain.as_mut() {
        restore_highlight(
            chain,
            state.selection.selected_index,
            state.selection.original_color.take(),
        );
    }
    state.selection.selected_index = None;
    state.selection.original_color = None;
    reset_controls(state);
    log::info!("Selektion aufgehoben");
}

fn restore_highlight(chain: &mut ChainModel, index: Option<usize>, color: Option<[f32; 4]>) {
    let (Some(index), Some(color)) = (index, color) else {
        return;
    };
    if let Some(joint) = chain.get_mut(index) {
        joint.color = color;
    }
}

/// Regler auf 0 und Baselines aus der aktuellen Pose übernehmen.
fn reset_controls(state: &mut AppState) {
    state.manipulator = ManipulatorState::default();
    if let Some(chain) = state.chain.as_mut() {
        chain.capture_baselines();
    }
}
