//! Handler für Trajektorien-Eingaben und -Ablauf.

use crate::app::animation::{TrajectoryMode, TrajectorySpec};
use crate::app::use_cases;
use crate::app::AppState;

/// Speichert den Zielwinkel-Rohtext eines Gelenks.
pub fn set_target_input(state: &mut AppState, index: usize, text: String) {
    let Some(joint) = state.chain.as_mut().and_then(|chain| chain.get_mut(index)) else {
        log::debug!("Zielwinkel ignoriert: Gelenk {} existiert nicht", index);
        return;
    };
    joint.target_input = text;
}

/// Speichert den Dauer-Rohtext.
pub fn set_duration_input(state: &mut AppState, text: String) {
    state.ui.duration_input = text;
}

/// Setzt den Ablaufmodus für die nächste Trajektorie.
pub fn set_coordinated(state: &mut AppState, coordinated: bool) {
    state.ui.coordinated = coordinated;
    log::info!(
        "Trajektorien-Modus: {}",
        if coordinated { "koordiniert" } else { "sequenziell" }
    );
}

/// Startet eine Trajektorie.
pub fn start(state: &mut AppState, spec: &TrajectorySpec, mode: TrajectoryMode) {
    use_cases::trajectory::start_trajectory(state, spec, mode);
}

/// Setzt die laufende Trajektorie um einen Frame fort.
pub fn advance(state: &mut AppState, dt: f32) {
    use_cases::trajectory::advance_trajectory(state, dt);
}

/// Bricht die laufende Trajektorie ab.
pub fn cancel(state: &mut AppState) {
    use_cases::trajectory::cancel_trajectory(state);
}

/// Setzt die Kette exakt zurück.
pub fn reset(state: &mut AppState) {
    use_cases::trajectory::reset_trajectory(state);
}
