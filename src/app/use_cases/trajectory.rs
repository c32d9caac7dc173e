//! Use-Case-Funktionen für Trajektorien: Start, Frame-Fortschritt, Abbruch, Reset.

use crate::app::animation::{TickOutcome, TrajectoryMode, TrajectorySpec, TrajectoryTask};
use crate::app::state::{format_angle, format_length, ManipulatorState};
use crate::app::use_cases::manipulation::rebase_translation_baselines;
use crate::app::AppState;

/// Registriert eine neue Trajektorie beim Frame-Scheduler.
///
/// Läuft bereits eine, wird der Start abgewiesen.
pub fn start_trajectory(state: &mut AppState, spec: &TrajectorySpec, mode: TrajectoryMode) {
    let Some(chain) = state.chain.as_ref() else {
        log::error!("Trajektorie nicht möglich: keine Kette vorhanden");
        return;
    };
    if state.animation.is_running() {
        log::warn!("Trajektorie läuft bereits, Start abgewiesen");
        return;
    }

    let Some(task) = TrajectoryTask::new(chain, spec, mode, state.options.rotation_axis()) else {
        log::warn!("Trajektorie ohne gültige Zielgelenke verworfen");
        return;
    };

    if state.animation.register(task) {
        log::info!(
            "Trajektorie gestartet ({:?}, {} Ziele, {:.2}s)",
            mode,
            spec.targets.len(),
            spec.duration
        );
    }
}

/// Weckt die laufende Trajektorie mit der Frame-Deltazeit.
pub fn advance_trajectory(state: &mut AppState, dt: f32) {
    let Some(chain) = state.chain.as_mut() else {
        return;
    };

    match state.animation.tick(chain, dt) {
        TickOutcome::Idle | TickOutcome::Advanced => {}
        TickOutcome::Completed => {
            let end = state.selection.effective_end_joint(chain);
            if let Some(joint) = chain.get(end) {
                state.ui.rotation_display = format_angle(joint.angle_deg);
            }
            rebase_translation_baselines(state);
            log::info!("Trajektorie abgeschlossen");
        }
    }
}

/// Bricht eine laufende Trajektorie ab. Die Gelenke behalten ihre Teil-Pose.
pub fn cancel_trajectory(state: &mut AppState) {
    if state.animation.cancel() {
        rebase_translation_baselines(state);
        log::info!("Trajektorie abgebrochen");
    } else {
        log::debug!("Abbruch ignoriert: keine Trajektorie aktiv");
    }
}

/// Setzt die Kette exakt auf den Erstellungszustand zurück.
///
/// Bricht eine laufende Trajektorie ab, leert Zielwinkel und Dauer, verwirft
/// die Längen-History und stellt Wachstumsrichtung und Regler zurück.
pub fn reset_trajectory(state: &mut AppState) {
    if state.animation.cancel() {
        log::info!("Laufende Trajektorie für Reset abgebrochen");
    }

    let Some(chain) = state.chain.as_mut() else {
        log::error!("Reset nicht möglich: keine Kette vorhanden");
        return;
    };

    chain.reset_to_initial();
    chain.clear_target_inputs();
    chain.capture_baselines();

    state.ui.duration_input.clear();
    state.editor.reset(&state.options);
    state.manipulator = ManipulatorState::default();
    state.ui.length_display = format_length(0.0);
    state.ui.rotation_display = format_angle(0.0);

    log::info!("Kette auf Ausgangszustand zurückgesetzt");
}
