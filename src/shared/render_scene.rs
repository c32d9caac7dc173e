//! Render-Szene als expliziter Übergabevertrag zwischen App und Viewport.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::ChainOptions;
use crate::core::Camera3D;
use glam::Vec3;

/// Darstellungsdaten eines einzelnen Gelenks.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJoint {
    /// Weltposition
    pub position: Vec3,
    /// Vorwärtsrichtung (für den Richtungsstrich)
    pub forward: Vec3,
    /// Hervorhebungsfarbe (RGBA)
    pub color: [f32; 4],
    /// Anzeigename
    pub label: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Gelenke in Kettenreihenfolge (leer, solange keine Basis platziert ist)
    pub joints: Vec<RenderJoint>,
    /// Index des selektierten Gelenks
    pub selected: Option<usize>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Läuft gerade eine Trajektorie?
    pub animating: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ChainOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kette für Rendering vorhanden ist.
    pub fn has_chain(&self) -> bool {
        !self.joints.is_empty()
    }

    /// Positionen der Polylinie in Kettenreihenfolge.
    pub fn path(&self) -> Vec<Vec3> {
        self.joints.iter().map(|j| j.position).collect()
    }
}
