//! Handler für Optionen und Anwendungssteuerung.

use crate::app::state::JointTemplate;
use crate::app::AppState;
use crate::shared::ChainOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt neue Optionen (ohne Persistenz). Ungültige Werte werden durch
/// Standardwerte ersetzt.
///
/// Die Gelenk-Vorlage übernimmt die neue Standardfarbe, die Längen-History
/// die neue Tiefe.
pub fn adopt_options(state: &mut AppState, options: ChainOptions) {
    let options = options.sanitized();
    state
        .editor
        .length_history
        .set_max_depth(options.history_depth);
    if state.joint_template.is_some() {
        state.joint_template = Some(JointTemplate::from_options(&options));
    }
    state.options = options;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: ChainOptions) -> anyhow::Result<()> {
    adopt_options(state, options);
    let path = ChainOptions::config_path();
    state.options.save_to_file(&path)
}
