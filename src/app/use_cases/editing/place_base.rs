//! Use-Case: Basisgelenk aus der externen Platzierung übernehmen.

use crate::app::AppState;
use crate::core::ChainModel;
use glam::{Quat, Vec3};

/// Legt die Kette mit genau dem Basisgelenk an.
///
/// Die Platzierung ist einmalig: existiert bereits eine Kette, wird der
/// Aufruf ignoriert.
pub fn place_base(state: &mut AppState, position: Vec3, rotation: Quat) {
    if state.chain.is_some() {
        log::info!("Basis bereits platziert, weitere Platzierung ignoriert");
        return;
    }

    let mut chain = ChainModel::new(position, rotation, state.options.joint_color_default);
    chain.capture_baselines();
    state.chain = Some(chain);
    state.view.camera.look_at(position);

    log::info!(
        "Basis platziert bei ({:.2}, {:.2}, {:.2})",
        position.x,
        position.y,
        position.z
    );
}
