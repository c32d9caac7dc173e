use crate::app::history::LengthHistory;
use crate::shared::ChainOptions;
use glam::Vec3;

/// Vorlage für neu angehängte Gelenke (extern zugewiesen).
#[derive(Debug, Clone, PartialEq)]
pub struct JointTemplate {
    /// Start-Farbe neuer Gelenke (RGBA)
    pub color: [f32; 4],
}

impl JointTemplate {
    /// Vorlage mit der Standard-Gelenkfarbe aus den Optionen.
    pub fn from_options(options: &ChainOptions) -> Self {
        Self {
            color: options.joint_color_default,
        }
    }
}

/// Zustand des Ketten-Editors (Wachstum, Verlängerung)
#[derive(Debug, Clone)]
pub struct ChainEditorState {
    /// Richtung, in die das nächste Gelenk angehängt wird
    pub current_direction: Vec3,
    /// Kumulierte Verlängerung, geklemmt auf `[0, max_length]`
    pub current_length: f32,
    /// Undo-Stack der Verlängerungen
    pub length_history: LengthHistory,
}

impl ChainEditorState {
    /// Erstellt den Editor-Zustand aus den Optionen.
    pub fn new(options: &ChainOptions) -> Self {
        Self {
            current_direction: options.initial_direction(),
            current_length: 0.0,
            length_history: LengthHistory::new_with_capacity(options.history_depth),
        }
    }

    /// Setzt Richtung, Länge und History auf den Ausgangszustand zurück.
    pub fn reset(&mut self, options: &ChainOptions) {
        *self = Self::new(options);
    }
}

impl Default for ChainEditorState {
    fn default() -> Self {
        Self::new(&ChainOptions::default())
    }
}

/// Letzte Werte der beiden kontinuierlichen Regler
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManipulatorState {
    /// Letzter Wert des Translations-Reglers
    pub translation_value: f32,
    /// Letzter Wert des Rotations-Reglers
    pub rotation_value: f32,
}
