//! Die zentrale Ketten-Datenstruktur: geordnete, nur wachsende Folge von Gelenken.

use super::kinematics;
use super::spatial::{JointMatch, SpatialIndex};
use super::Joint;
use glam::{Quat, Vec3};

/// Gelenkkette mit der Basis an Index 0.
///
/// Invarianten:
/// - `len() >= 1`, die Basis wird nie entfernt
/// - Gelenke werden nur angehängt, `joints[i].index == i`
#[derive(Debug, Clone)]
pub struct ChainModel {
    joints: Vec<Joint>,
}

impl ChainModel {
    /// Erstellt eine Kette, die nur aus der extern platzierten Basis besteht.
    pub fn new(base_position: Vec3, base_rotation: Quat, base_color: [f32; 4]) -> Self {
        Self {
            joints: vec![Joint::new(0, base_position, base_rotation, base_color)],
        }
    }

    /// Hängt ein neues Gelenk an und gibt seinen Index zurück.
    pub fn append(&mut self, position: Vec3, rotation: Quat, color: [f32; 4]) -> usize {
        let index = self.joints.len();
        self.joints.push(Joint::new(index, position, rotation, color));
        index
    }

    /// Gibt das Gelenk an `index` zurück.
    pub fn get(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    /// Mutable Variante von [`ChainModel::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Joint> {
        self.joints.get_mut(index)
    }

    /// Anzahl der Gelenke (immer >= 1).
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// `true`, solange noch kein Gelenk existiert.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Index des letzten Gelenks.
    pub fn last_index(&self) -> usize {
        self.joints.len().saturating_sub(1)
    }

    /// Prüft ob `index` in `[0, len)` liegt.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.joints.len()
    }

    /// Read-only Sicht auf alle Gelenke.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Mutable Sicht auf alle Gelenke. Die Länge bleibt unveränderlich.
    pub fn joints_mut(&mut self) -> &mut [Joint] {
        &mut self.joints
    }

    /// Aktuelle Positionen in Kettenreihenfolge (für den Path-Renderer).
    pub fn positions(&self) -> Vec<Vec3> {
        self.joints.iter().map(|j| j.position).collect()
    }

    /// Setzt die Position eines Gelenks. `false` bei ungültigem Index.
    pub fn set_position(&mut self, index: usize, position: Vec3) -> bool {
        let Some(joint) = self.joints.get_mut(index) else {
            return false;
        };
        joint.position = position;
        true
    }

    /// Setzt Orientierung und zugehörigen Winkel eines Gelenks. `false` bei ungültigem Index.
    pub fn set_rotation(&mut self, index: usize, rotation: Quat, angle_deg: f32) -> bool {
        let Some(joint) = self.joints.get_mut(index) else {
            return false;
        };
        joint.rotation = rotation;
        joint.angle_deg = kinematics::wrap_degrees(angle_deg);
        true
    }

    /// Setzt alle Gelenke exakt auf ihre Erstellungswerte zurück.
    pub fn reset_to_initial(&mut self) {
        for joint in &mut self.joints {
            joint.restore_initial();
        }
    }

    /// Übernimmt die aktuelle Y-Koordinate jedes Gelenks als Translations-Baseline.
    pub fn capture_baselines(&mut self) {
        for joint in &mut self.joints {
            joint.baseline_y = joint.position.y;
        }
    }

    /// Richtet die Baselines nach einer Fremd-Mutation neu aus.
    ///
    /// Gelenke ab `from` tragen den aktuellen Kontrollwert `offset` bereits in
    /// ihrer Y-Koordinate, alle davor nicht.
    pub fn rebase_baselines(&mut self, from: usize, offset: f32) {
        for joint in &mut self.joints {
            joint.baseline_y = if joint.index >= from {
                joint.position.y - offset
            } else {
                joint.position.y
            };
        }
    }

    /// Abstand jedes Gelenks zu seinem Vorgänger (Basis: 0).
    pub fn link_lengths(&self) -> Vec<f32> {
        kinematics::link_lengths(&self.joints)
    }

    /// Summe aller Link-Längen.
    pub fn total_length(&self) -> f32 {
        self.link_lengths().iter().sum()
    }

    /// Leert alle Zielwinkel-Eingaben.
    pub fn clear_target_inputs(&mut self) {
        for joint in &mut self.joints {
            joint.target_input.clear();
        }
    }

    /// Baut einen Spatial-Index über die aktuellen Gelenkpositionen.
    pub fn spatial_index(&self) -> SpatialIndex {
        SpatialIndex::from_positions(&self.positions())
    }

    /// Findet das nächste Gelenk zu einer Weltposition.
    pub fn nearest_joint(&self, query: Vec3) -> Option<JointMatch> {
        self.spatial_index().nearest(query)
    }
}
