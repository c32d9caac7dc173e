//! Use-Case-Funktionen für die Gelenk-Selektion.
//!
//! - `toggle`: Gelenk an-/abwählen inkl. Hervorhebung
//! - `pick`: Gelenk per Strahl oder Weltpunkt finden und umschalten

mod pick;
mod toggle;

pub use pick::{pick_joint_along_ray, pick_nearest_joint};
pub use toggle::{clear_selection, toggle_selection};
