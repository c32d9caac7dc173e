//! Use-Case-Funktionen für Kamera-Steuerung und Viewport.

use crate::app::AppState;
use crate::core::Camera3D;
use glam::Vec3;

/// Setzt die Kamera zurück und zentriert sie auf die Kette.
pub fn reset_camera(state: &mut AppState) {
    let mut camera = Camera3D::new();
    if let Some(chain) = state.chain.as_ref() {
        let positions = chain.positions();
        if !positions.is_empty() {
            let center = positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
            camera.look_at(center);
        }
    }
    state.view.camera = camera;
}

/// Orbitiert die Kamera um ihr Ziel.
pub fn orbit(state: &mut AppState, delta_yaw: f32, delta_pitch: f32) {
    state.view.camera.orbit(delta_yaw, delta_pitch);
}

/// Zoomt die Kamera um einen Faktor.
pub fn zoom(state: &mut AppState, factor: f32) {
    if !factor.is_finite() || factor <= 0.0 {
        return;
    }
    state.view.camera.zoom_by(factor);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
