//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderJoint, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let joints = state
        .chain
        .as_ref()
        .map(|chain| {
            chain
                .joints()
                .iter()
                .map(|joint| RenderJoint {
                    position: joint.position,
                    forward: joint.forward(),
                    color: joint.color,
                    label: joint.label.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    let selected = state
        .chain
        .as_ref()
        .and_then(|chain| state.selection.selected_in(chain));

    RenderScene {
        joints,
        selected,
        camera: state.view.camera.clone(),
        viewport_size,
        animating: state.animation.is_running(),
        options: state.options.clone(),
    }
}
