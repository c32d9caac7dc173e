//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera zurück und zentriert sie auf die Kette.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Orbitiert die Kamera.
pub fn orbit(state: &mut AppState, delta_yaw: f32, delta_pitch: f32) {
    use_cases::camera::orbit(state, delta_yaw, delta_pitch);
}

/// Zoomt die Kamera.
pub fn zoom(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom(state, factor);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}
