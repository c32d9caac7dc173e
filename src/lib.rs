//! Linkage Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FrameScheduler, TrajectoryMode,
    TrajectorySpec, UiState, ViewState,
};
pub use core::{Camera3D, ChainModel, Joint, JointMatch, SpatialIndex};
pub use shared::{ChainOptions, PathRenderer, RenderScene, SharedPath};
