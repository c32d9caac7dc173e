use crate::app::animation::FrameScheduler;
use crate::app::CommandLog;
use crate::core::ChainModel;
use crate::shared::ChainOptions;

use super::{ChainEditorState, JointTemplate, ManipulatorState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Gelenkkette (None = Basis noch nicht platziert)
    pub chain: Option<ChainModel>,
    /// Vorlage für neue Gelenke (None = nicht verfügbar, `AddJoint` bricht ab)
    pub joint_template: Option<JointTemplate>,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-State (Richtung, Verlängerung, Undo)
    pub editor: ChainEditorState,
    /// Letzte Reglerwerte
    pub manipulator: ManipulatorState,
    /// UI-State
    pub ui: UiState,
    /// View-State
    pub view: ViewState,
    /// Frame-Scheduler für Trajektorien
    pub animation: FrameScheduler,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ChainOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(ChainOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: ChainOptions) -> Self {
        Self {
            chain: None,
            joint_template: Some(JointTemplate::from_options(&options)),
            selection: SelectionState::new(),
            editor: ChainEditorState::new(&options),
            manipulator: ManipulatorState::default(),
            ui: UiState::new(&options),
            view: ViewState::new(),
            animation: FrameScheduler::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Gelenke zurück (für UI-Anzeige)
    pub fn joint_count(&self) -> usize {
        self.chain.as_ref().map_or(0, |chain| chain.len())
    }

    /// Gibt zurück, ob gerade eine Trajektorie läuft.
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Gibt zurück, ob ein Verkürzungs-Schritt verfügbar ist.
    pub fn can_decrease_length(&self) -> bool {
        self.editor.length_history.can_undo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
