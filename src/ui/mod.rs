//! UI-Komponenten: Steuer-Panel, Optionen, Status-Bar und 3D-Viewport.
//!
//! Alle Widgets lesen nur aus dem `AppState` und geben `AppIntent`s zurück.

mod color;
pub mod options_dialog;
pub mod panel;
pub mod status;
pub mod viewport;

pub use options_dialog::show_options_section;
pub use panel::render_control_panel;
pub use status::render_status_bar;
pub use viewport::{paint_scene, ViewportInput};
