//! Adapter-Vertrag zum externen Path-Renderer (Polylinie durch alle Gelenke).

use glam::Vec3;
use std::sync::{Arc, Mutex};

/// Externer Kollaborateur, der eine Polylinie durch die Gelenkpositionen zeichnet.
///
/// Wird nach jeder Mutation der Kette aufgerufen und erhält immer genau
/// `chain.len()` Positionen in Kettenreihenfolge.
pub trait PathRenderer {
    /// Übernimmt die aktuellen Positionen.
    fn set_positions(&mut self, positions: &[Vec3]);
}

/// Geteilter Positions-Puffer, den ein Host pro Frame ausliest.
///
/// Der Controller schreibt über [`PathRenderer`], der Viewport liest über
/// [`SharedPath::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SharedPath {
    positions: Arc<Mutex<Vec<Vec3>>>,
}

impl SharedPath {
    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert eine Kopie der zuletzt übergebenen Positionen.
    pub fn snapshot(&self) -> Vec<Vec3> {
        match self.positions.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                log::error!("Path-Lock fehlgeschlagen (Mutex vergiftet)");
                Vec::new()
            }
        }
    }
}

impl PathRenderer for SharedPath {
    fn set_positions(&mut self, positions: &[Vec3]) {
        let Ok(mut guard) = self.positions.lock() else {
            log::error!("Path-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        guard.clear();
        guard.extend_from_slice(positions);
    }
}
