//! Einzelnes Gelenk der Kette inklusive aller gelenkbezogenen Buchhaltung.

use glam::{Quat, Vec3};

/// Ein Gelenk (Knoten) der Kette.
///
/// Alle pro-Gelenk-Daten (Startwerte, Translations-Baseline, Farbe, Label,
/// Zielwinkel-Eingabe) liegen in diesem einen Record. Dadurch bleibt die
/// Buchhaltung strukturell index-synchron mit der Kette.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// Ordinalposition in der Kette (stabiler Handle, 0 = Basis)
    pub index: usize,
    /// Aktuelle Weltposition
    pub position: Vec3,
    /// Aktuelle Weltorientierung
    pub rotation: Quat,
    /// Aktueller Winkel um die konfigurierte Rotationsachse in Grad, `[0, 360)`
    pub angle_deg: f32,
    /// Position zum Erstellungszeitpunkt
    pub initial_position: Vec3,
    /// Orientierung zum Erstellungszeitpunkt
    pub initial_rotation: Quat,
    /// Winkel zum Erstellungszeitpunkt
    pub initial_angle_deg: f32,
    /// Baseline der Y-Koordinate für den Translations-Kanal
    pub baseline_y: f32,
    /// Aktuelle Hervorhebungsfarbe (RGBA)
    pub color: [f32; 4],
    /// Anzeigename im UI
    pub label: String,
    /// Rohtext des Zielwinkel-Eingabefelds dieses Gelenks
    pub target_input: String,
}

impl Joint {
    /// Erstellt ein neues Gelenk und hält Position/Orientierung als Startwerte fest.
    pub fn new(index: usize, position: Vec3, rotation: Quat, color: [f32; 4]) -> Self {
        let label = if index == 0 {
            "Base".to_string()
        } else {
            format!("Joint {index}")
        };

        Self {
            index,
            position,
            rotation,
            angle_deg: 0.0,
            initial_position: position,
            initial_rotation: rotation,
            initial_angle_deg: 0.0,
            baseline_y: position.y,
            color,
            label,
            target_input: String::new(),
        }
    }

    /// Vorwärtsrichtung des Gelenks (lokale +Z-Achse in Weltkoordinaten).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        super::kinematics::forward(self.rotation)
    }

    /// Ist das Gelenk die Basis der Kette?
    pub fn is_base(&self) -> bool {
        self.index == 0
    }

    /// Setzt Position, Orientierung und Winkel auf die Erstellungswerte zurück.
    pub fn restore_initial(&mut self) {
        self.position = self.initial_position;
        self.rotation = self.initial_rotation;
        self.angle_deg = self.initial_angle_deg;
    }
}
