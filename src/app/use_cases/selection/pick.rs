use super::toggle_selection;
use crate::app::AppState;
use glam::Vec3;

/// Sucht das vorderste Gelenk entlang des Pick-Strahls und schaltet es um.
///
/// Ein Fehlschuss ändert die Selektion nicht. Gibt den getroffenen Index zurück.
pub fn pick_joint_along_ray(
    state: &mut AppState,
    origin: Vec3,
    direction: Vec3,
    radius: f32,
) -> Option<usize> {
    let Some(chain) = state.chain.as_ref() else {
        log::error!("Pick nicht möglich: keine Kette vorhanden");
        return None;
    };

    let hit = chain
        .spatial_index()
        .pick_along_ray(origin, direction, radius)?;
    toggle_selection(state, hit.index);
    Some(hit.index)
}

/// Sucht das nächste Gelenk zu einem Weltpunkt innerhalb von `max_distance`.
pub fn pick_nearest_joint(state: &mut AppState, point: Vec3, max_distance: f32) -> Option<usize> {
    let Some(chain) = state.chain.as_ref() else {
        log::error!("Pick nicht möglich: keine Kette vorhanden");
        return None;
    };

    let hit = chain
        .nearest_joint(point)
        .filter(|hit| hit.distance <= max_distance)?;
    toggle_selection(state, hit.index);
    Some(hit.index)
}
