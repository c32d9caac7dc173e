//! Use-Case: Translations-Regler auf die selektierte Teilkette anwenden.

use crate::app::AppState;

/// Setzt die Y-Koordinate aller Gelenke ab der Selektion auf `baseline + value`.
///
/// Der Wert wird auf `translation_range` begrenzt. Ohne Selektion bleibt auch
/// der gemerkte Reglerwert unverändert.
pub fn set_translation_value(state: &mut AppState, value: f32) {
    let value = state.options.clamp_translation(value);

    let Some(chain) = state.chain.as_mut() else {
        log::error!("Translation nicht möglich: keine Kette vorhanden");
        return;
    };
    let Some(selected) = state.selection.selected_in(chain) else {
        log::debug!("Translation ignoriert: kein Gelenk selektiert");
        return;
    };

    if value - state.manipulator.translation_value == 0.0 {
        return;
    }

    for joint in chain.joints_mut().iter_mut().skip(selected) {
        joint.position.y = joint.baseline_y + value;
    }
    state.manipulator.translation_value = value;

    log::debug!("Translation ab Gelenk {}: {:.3}", selected, value);
}
