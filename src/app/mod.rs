//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod animation;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kette, Selektion, Regler, View).
pub mod state;
pub mod use_cases;

pub use animation::{FrameScheduler, TrajectoryMode, TrajectorySpec, TrajectoryTask};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{LengthHistory, LengthStep};
pub use intent_mapping::{parse_duration, parse_target_angle};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, ChainEditorState, JointTemplate, ManipulatorState, SelectionState, UiState,
    ViewState,
};
