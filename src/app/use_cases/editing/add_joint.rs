//! Use-Case: Neues Gelenk an die Kette hängen.

use crate::app::use_cases::manipulation::rebase_translation_baselines;
use crate::app::AppState;
use glam::Quat;

/// Hängt ein Gelenk im Abstand `joint_spacing` in `current_direction` an.
///
/// Das neue Gelenk startet mit Einheitsrotation und der Farbe der
/// Gelenk-Vorlage. Ohne Vorlage oder ohne Kette passiert nichts.
pub fn add_joint(state: &mut AppState) {
    let Some(template) = state.joint_template.as_ref() else {
        log::error!("Gelenk nicht hinzufügbar: keine Gelenk-Vorlage zugewiesen");
        return;
    };
    let color = template.color;

    let Some(chain) = state.chain.as_mut() else {
        log::error!("Gelenk nicht hinzufügbar: Basis noch nicht platziert");
        return;
    };

    let last_position = chain
        .get(chain.last_index())
        .map(|joint| joint.position)
        .unwrap_or_default();
    let position =
        last_position + state.editor.current_direction * state.options.joint_spacing;
    let index = chain.append(position, Quat::IDENTITY, color);

    rebase_translation_baselines(state);

    log::info!("Gelenk {} angehängt ({} Gelenke)", index, state.joint_count());
}
