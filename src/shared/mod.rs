//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` bzw. dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod path_renderer;
mod render_scene;

pub use options::ChainOptions;
pub use path_renderer::{PathRenderer, SharedPath};
pub use render_scene::{RenderJoint, RenderScene};
