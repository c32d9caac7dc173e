//! Handler für Basis-Platzierung, Gelenk-Anhängen und Längenänderung.

use crate::app::use_cases;
use crate::app::AppState;
use glam::{Quat, Vec3};

/// Legt die Kette mit dem extern platzierten Basisgelenk an.
pub fn place_base(state: &mut AppState, position: Vec3, rotation: Quat) {
    use_cases::editing::place_base(state, position, rotation);
}

/// Hängt ein neues Gelenk an.
pub fn add_joint(state: &mut AppState) {
    use_cases::editing::add_joint(state);
}

/// Verlängert das effektive Endgelenk.
pub fn increase_length(state: &mut AppState) {
    use_cases::editing::increase_length(state);
}

/// Nimmt die letzte Verlängerung zurück.
pub fn decrease_length(state: &mut AppState) {
    use_cases::editing::decrease_length(state);
}
