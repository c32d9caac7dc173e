//! Handler für Regler und Rotationsschritte.

use crate::app::use_cases;
use crate::app::use_cases::manipulation::StepDirection;
use crate::app::AppState;

/// Übernimmt den Translations-Reglerwert.
pub fn set_translation(state: &mut AppState, value: f32) {
    use_cases::manipulation::set_translation_value(state, value);
}

/// Übernimmt den Rotations-Reglerwert.
pub fn set_rotation(state: &mut AppState, value: f32) {
    use_cases::manipulation::set_rotation_value(state, value);
}

/// Dreht das Endgelenk einen Schritt vorwärts.
pub fn rotate_step_forward(state: &mut AppState) {
    use_cases::manipulation::rotate_step(state, StepDirection::Forward);
}

/// Dreht das Endgelenk einen Schritt rückwärts.
pub fn rotate_step_backward(state: &mut AppState) {
    use_cases::manipulation::rotate_step(state, StepDirection::Backward);
}
