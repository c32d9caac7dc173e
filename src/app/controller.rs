//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{PathRenderer, RenderScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält den externen Path-Renderer und synchronisiert ihn nach jedem
/// Command, der die Kettengeometrie verändern kann.
#[derive(Default)]
pub struct AppController {
    renderer: Option<Box<dyn PathRenderer>>,
}

impl AppController {
    /// Erstellt einen Controller ohne Renderer.
    ///
    /// Kettenverändernde Commands werden abgewiesen, bis ein Renderer
    /// zugewiesen ist.
    pub fn new() -> Self {
        Self { renderer: None }
    }

    /// Erstellt einen Controller mit Path-Renderer.
    pub fn with_renderer(renderer: Box<dyn PathRenderer>) -> Self {
        Self {
            renderer: Some(renderer),
        }
    }

    /// Weist einen (neuen) Path-Renderer zu.
    pub fn set_renderer(&mut self, renderer: Box<dyn PathRenderer>) {
        self.renderer = Some(renderer);
    }

    /// Gibt zurück, ob ein Renderer zugewiesen ist.
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let mutates_chain = command.mutates_chain();

        if mutates_chain && self.renderer.is_none() {
            anyhow::bail!("Kein Path-Renderer zugewiesen: {:?} abgewiesen", command);
        }
        if state.animation.is_running() && !command.allowed_during_animation() {
            log::warn!("Trajektorie läuft, {:?} abgewiesen", command);
            return Ok(());
        }

        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::PlaceBase { position, rotation } => {
                handlers::editing::place_base(state, position, rotation)
            }
            AppCommand::AddJoint => handlers::editing::add_joint(state),
            AppCommand::IncreaseLength => handlers::editing::increase_length(state),
            AppCommand::DecreaseLength => handlers::editing::decrease_length(state),

            // === Selektion ===
            AppCommand::ToggleJointSelection { index } => {
                handlers::selection::toggle(state, index)
            }
            AppCommand::PickJointAlongRay {
                origin,
                direction,
                radius,
            } => handlers::selection::pick_along_ray(state, origin, direction, radius),
            AppCommand::PickNearestJoint {
                point,
                max_distance,
            } => handlers::selection::pick_nearest(state, point, max_distance),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Regler & Rotationsschritte ===
            AppCommand::SetTranslationValue { value } => {
                handlers::manipulation::set_translation(state, value)
            }
            AppCommand::SetRotationValue { value } => {
                handlers::manipulation::set_rotation(state, value)
            }
            AppCommand::RotateStepForward => handlers::manipulation::rotate_step_forward(state),
            AppCommand::RotateStepBackward => handlers::manipulation::rotate_step_backward(state),

            // === Trajektorie ===
            AppCommand::SetTargetInput { index, text } => {
                handlers::trajectory::set_target_input(state, index, text)
            }
            AppCommand::SetDurationInput { text } => {
                handlers::trajectory::set_duration_input(state, text)
            }
            AppCommand::SetCoordinatedMode { coordinated } => {
                handlers::trajectory::set_coordinated(state, coordinated)
            }
            AppCommand::StartTrajectory { spec, mode } => {
                handlers::trajectory::start(state, &spec, mode)
            }
            AppCommand::AdvanceTrajectory { dt } => handlers::trajectory::advance(state, dt),
            AppCommand::CancelTrajectory => handlers::trajectory::cancel(state),
            AppCommand::ResetTrajectory => handlers::trajectory::reset(state),

            // === Kamera & Viewport ===
            AppCommand::OrbitCamera {
                delta_yaw,
                delta_pitch,
            } => handlers::view::orbit(state, delta_yaw, delta_pitch),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        if mutates_chain {
            self.sync_renderer(state);
        }

        Ok(())
    }

    /// Übergibt die aktuellen Gelenkpositionen an den Path-Renderer.
    pub fn sync_renderer(&mut self, state: &AppState) {
        let (Some(renderer), Some(chain)) = (self.renderer.as_mut(), state.chain.as_ref()) else {
            return;
        };
        renderer.set_positions(&chain.positions());
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
