use crate::shared::ChainOptions;
use glam::{Quat, Vec3};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Externe Platzierung hat die Basis gesetzt (einmalig)
    BasePlaced { position: Vec3, rotation: Quat },
    /// Klick im Viewport: Gelenk entlang des Pick-Strahls suchen
    JointPickRequested {
        ray_origin: Vec3,
        ray_direction: Vec3,
    },
    /// Gelenk direkt über seinen Index (Liste/Panel) an- oder abwählen
    JointClicked { index: usize },
    /// Auswahl aufheben
    SelectionClearRequested,
    /// Neues Gelenk an die Kette hängen
    AddJointRequested,
    /// Endgelenk um einen Schritt verlängern
    IncreaseLengthRequested,
    /// Letzte Verlängerung rückgängig machen
    DecreaseLengthRequested,
    /// Translations-Regler bewegt (absoluter Wert)
    TranslationControlChanged { value: f32 },
    /// Rotations-Regler bewegt (absoluter Wert)
    RotationControlChanged { value: f32 },
    /// Endgelenk um einen Rotationsschritt vorwärts drehen
    RotateStepForwardRequested,
    /// Endgelenk um einen Rotationsschritt rückwärts drehen
    RotateStepBackwardRequested,
    /// Zielwinkel-Textfeld eines Gelenks bearbeitet
    TargetAngleEdited { index: usize, text: String },
    /// Dauer-Textfeld bearbeitet
    DurationEdited { text: String },
    /// Modus-Umschalter koordiniert/sequenziell
    CoordinatedModeToggled { coordinated: bool },
    /// "Done": Eingaben lesen und Trajektorie starten
    TrajectoryDoneRequested,
    /// Kette exakt auf den Ausgangszustand zurücksetzen
    TrajectoryResetRequested,
    /// Laufende Trajektorie abbrechen
    TrajectoryCancelRequested,
    /// Host-Frame mit Deltazeit in Sekunden
    FrameTick { dt: f32 },
    /// Kamera orbitieren (Radiant)
    CameraOrbit { delta_yaw: f32, delta_pitch: f32 },
    /// Kamera zoomen
    CameraZoom { factor: f32 },
    /// Kamera auf die Kette zentrieren
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Optionen aus dem Options-Bereich übernehmen
    OptionsApplied { options: Box<ChainOptions> },
    /// Anwendung beenden
    ExitRequested,
}
