use crate::app::AppState;

/// Richtet die Translations-Baselines an der aktuellen Pose aus.
///
/// Gelenke ab der Selektion tragen den aktuellen Reglerwert bereits in ihrer
/// Y-Koordinate. Ohne Selektion ist die Baseline die aktuelle Höhe.
pub fn rebase_translation_baselines(state: &mut AppState) {
    let Some(chain) = state.chain.as_mut() else {
        return;
    };
    match state.selection.selected_in(chain) {
        Some(index) => chain.rebase_baselines(index, state.manipulator.translation_value),
        None => chain.capture_baselines(),
    }
}
