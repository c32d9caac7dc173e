//! Use-Case-Funktionen für die kontinuierlichen Regler und Rotationsschritte.
//!
//! - `translation`: vertikaler Kanal mit Baseline-Tracking
//! - `rotation`: absoluter Rotationskanal und ±Schritt mit starrer Propagation
//! - `baseline`: Baselines nach Fremd-Mutationen nachziehen

mod baseline;
mod rotation;
mod translation;

pub use baseline::rebase_translation_baselines;
pub use rotation::{apply_joint_angle, rotate_step, set_rotation_value, StepDirection};
pub use translation::set_translation_value;
