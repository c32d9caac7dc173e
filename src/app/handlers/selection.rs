//! Handler für die Gelenk-Selektion.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec3;

/// Schaltet die Selektion eines Gelenks um.
pub fn toggle(state: &mut AppState, index: usize) {
    use_cases::selection::toggle_selection(state, index);
}

/// Pickt ein Gelenk entlang eines Strahls.
pub fn pick_along_ray(state: &mut AppState, origin: Vec3, direction: Vec3, radius: f32) {
    if use_cases::selection::pick_joint_along_ray(state, origin, direction, radius).is_none() {
        log::debug!("Pick ohne Treffer");
    }
}

/// Pickt das nächste Gelenk zu einem Weltpunkt.
pub fn pick_nearest(state: &mut AppState, point: Vec3, max_distance: f32) {
    if use_cases::selection::pick_nearest_joint(state, point, max_distance).is_none() {
        log::debug!("Pick ohne Treffer");
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
