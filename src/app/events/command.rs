use crate::app::animation::{TrajectoryMode, TrajectorySpec};
use crate::shared::ChainOptions;
use glam::{Quat, Vec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kette mit dem Basisgelenk anlegen
    PlaceBase { position: Vec3, rotation: Quat },
    /// Gelenk an-/abwählen (gleicher Index = abwählen)
    ToggleJointSelection { index: usize },
    /// Gelenk entlang eines Strahls picken und umschalten
    PickJointAlongRay {
        origin: Vec3,
        direction: Vec3,
        radius: f32,
    },
    /// Nächstes Gelenk zu einem Weltpunkt picken und umschalten
    PickNearestJoint { point: Vec3, max_distance: f32 },
    /// Auswahl aufheben
    ClearSelection,
    /// Gelenk anhängen
    AddJoint,
    /// Endgelenk verlängern
    IncreaseLength,
    /// Letzte Verlängerung zurücknehmen
    DecreaseLength,
    /// Translations-Kanal setzen
    SetTranslationValue { value: f32 },
    /// Rotations-Kanal setzen
    SetRotationValue { value: f32 },
    /// Rotationsschritt vorwärts
    RotateStepForward,
    /// Rotationsschritt rückwärts
    RotateStepBackward,
    /// Zielwinkel-Rohtext eines Gelenks speichern
    SetTargetInput { index: usize, text: String },
    /// Dauer-Rohtext speichern
    SetDurationInput { text: String },
    /// Modus setzen
    SetCoordinatedMode { coordinated: bool },
    /// Trajektorie starten
    StartTrajectory {
        spec: TrajectorySpec,
        mode: TrajectoryMode,
    },
    /// Laufende Trajektorie um einen Frame fortsetzen
    AdvanceTrajectory { dt: f32 },
    /// Laufende Trajektorie abmelden
    CancelTrajectory,
    /// Exakter Reset auf Erstellungszustand
    ResetTrajectory,
    /// Kamera orbitieren
    OrbitCamera { delta_yaw: f32, delta_pitch: f32 },
    /// Kamera zoomen
    ZoomCamera { factor: f32 },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<ChainOptions> },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Gibt `true` zurück, wenn der Command die Kettengeometrie verändern kann
    /// und danach der Renderer synchronisiert werden muss.
    pub fn mutates_chain(&self) -> bool {
        matches!(
            self,
            AppCommand::PlaceBase { .. }
                | AppCommand::AddJoint
                | AppCommand::IncreaseLength
                | AppCommand::DecreaseLength
                | AppCommand::SetTranslationValue { .. }
                | AppCommand::SetRotationValue { .. }
                | AppCommand::RotateStepForward
                | AppCommand::RotateStepBackward
                | AppCommand::StartTrajectory { .. }
                | AppCommand::AdvanceTrajectory { .. }
                | AppCommand::ResetTrajectory
        )
    }

    /// Gibt `true` zurück, wenn der Command während einer laufenden
    /// Trajektorie ausgeführt werden darf.
    pub fn allowed_during_animation(&self) -> bool {
        !self.mutates_chain()
            || matches!(
                self,
                AppCommand::AdvanceTrajectory { .. } | AppCommand::ResetTrajectory
            )
    }
}
