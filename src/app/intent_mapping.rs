//! Mapping von UI-Intents auf mutierende App-Commands.

use super::animation::{TrajectoryMode, TrajectorySpec};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::ChainOptions;
use std::collections::BTreeMap;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::BasePlaced { position, rotation } => {
            vec![AppCommand::PlaceBase { position, rotation }]
        }
        AppIntent::JointPickRequested {
            ray_origin,
            ray_direction,
        } => {
            let radius = state
                .view
                .camera
                .pick_radius_world(state.view.viewport_size[1], state.options.pick_radius_px);
            vec![AppCommand::PickJointAlongRay {
                origin: ray_origin,
                direction: ray_direction,
                radius,
            }]
        }
        AppIntent::JointClicked { index } => vec![AppCommand::ToggleJointSelection { index }],
        AppIntent::SelectionClearRequested => vec![AppCommand::ClearSelection],
        AppIntent::AddJointRequested => vec![AppCommand::AddJoint],
        AppIntent::IncreaseLengthRequested => vec![AppCommand::IncreaseLength],
        AppIntent::DecreaseLengthRequested => vec![AppCommand::DecreaseLength],
        AppIntent::TranslationControlChanged { value } => {
            vec![AppCommand::SetTranslationValue { value }]
        }
        AppIntent::RotationControlChanged { value } => {
            vec![AppCommand::SetRotationValue { value }]
        }
        AppIntent::RotateStepForwardRequested => vec![AppCommand::RotateStepForward],
        AppIntent::RotateStepBackwardRequested => vec![AppCommand::RotateStepBackward],
        AppIntent::TargetAngleEdited { index, text } => {
            vec![AppCommand::SetTargetInput { index, text }]
        }
        AppIntent::DurationEdited { text } => vec![AppCommand::SetDurationInput { text }],
        AppIntent::CoordinatedModeToggled { coordinated } => {
            vec![AppCommand::SetCoordinatedMode { coordinated }]
        }
        AppIntent::TrajectoryDoneRequested => match build_trajectory_spec(state) {
            Some(spec) => {
                let mode = if state.ui.coordinated {
                    TrajectoryMode::Coordinated
                } else {
                    TrajectoryMode::Sequential
                };
                vec![AppCommand::StartTrajectory { spec, mode }]
            }
            None => {
                log::error!("Trajektorie nicht möglich: keine Kette vorhanden");
                vec![]
            }
        },
        AppIntent::TrajectoryResetRequested => vec![AppCommand::ResetTrajectory],
        AppIntent::TrajectoryCancelRequested => vec![AppCommand::CancelTrajectory],
        AppIntent::FrameTick { dt } => {
            if state.animation.is_running() {
                vec![AppCommand::AdvanceTrajectory { dt }]
            } else {
                vec![]
            }
        }
        AppIntent::CameraOrbit {
            delta_yaw,
            delta_pitch,
        } => vec![AppCommand::OrbitCamera {
            delta_yaw,
            delta_pitch,
        }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Liest alle Zielwinkel-Felder und das Dauer-Feld zu einer Trajektorie.
fn build_trajectory_spec(state: &AppState) -> Option<TrajectorySpec> {
    let chain = state.chain.as_ref()?;
    let targets: BTreeMap<usize, f32> = chain
        .joints()
        .iter()
        .map(|joint| (joint.index, parse_target_angle(&joint.target_input)))
        .collect();
    let duration = parse_duration(&state.ui.duration_input, &state.options);

    Some(TrajectorySpec { targets, duration })
}

/// Parst einen Zielwinkel in Grad. Leer, ungültig oder nicht endlich ergibt 0.
pub fn parse_target_angle(text: &str) -> f32 {
    match text.trim().parse::<f32>() {
        Ok(angle) if angle.is_finite() => angle,
        _ => 0.0,
    }
}

/// Parst die Trajektorien-Dauer in Sekunden.
///
/// Ungültige, nicht endliche oder nicht positive Eingaben ergeben
/// `default_duration`; positive Werte unter `min_duration` werden angehoben.
pub fn parse_duration(text: &str, options: &ChainOptions) -> f32 {
    match text.trim().parse::<f32>() {
        Ok(duration) if duration.is_finite() && duration > 0.0 => {
            if duration < options.min_duration {
                log::warn!(
                    "Dauer {} unter Minimum, verwende {}",
                    duration,
                    options.min_duration
                );
                options.min_duration
            } else {
                duration
            }
        }
        _ => {
            log::warn!(
                "Ungültige Dauer '{}', verwende Standard {}",
                text,
                options.default_duration
            );
            options.default_duration
        }
    }
}
