//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{ChainEditorState, JointTemplate, ManipulatorState};
pub use selection::SelectionState;
pub use ui::UiState;
pub(crate) use ui::{format_angle, format_length};
pub use view::ViewState;
