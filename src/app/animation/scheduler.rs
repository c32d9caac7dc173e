//! Frame-Scheduler: hält höchstens einen laufenden Trajektorien-Task pro Kette.

use super::task::{TaskStatus, TrajectoryTask};
use crate::core::ChainModel;

/// Ergebnis eines Frame-Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Kein Task registriert
    Idle,
    /// Task wurde fortgesetzt und läuft weiter
    Advanced,
    /// Task hat sein Ziel erreicht und wurde abgemeldet
    Completed,
}

/// Kooperativer Scheduler, der pro Frame einmal geweckt wird.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    active: Option<TrajectoryTask>,
    completed_runs: u64,
}

impl FrameScheduler {
    /// Erstellt einen leeren Scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Läuft gerade ein Task?
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Read-only Zugriff auf den laufenden Task.
    pub fn active(&self) -> Option<&TrajectoryTask> {
        self.active.as_ref()
    }

    /// Anzahl regulär abgeschlossener Läufe.
    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    /// Registriert einen Task. Ist bereits einer aktiv, wird der neue abgewiesen.
    pub fn register(&mut self, task: TrajectoryTask) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(task);
        true
    }

    /// Meldet den laufenden Task ab. Gibt `true` zurück, falls einer lief.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Weckt den laufenden Task mit der Frame-Deltazeit.
    pub fn tick(&mut self, chain: &mut ChainModel, dt: f32) -> TickOutcome {
        let Some(task) = self.active.as_mut() else {
            return TickOutcome::Idle;
        };

        match task.resume(chain, dt) {
            TaskStatus::Running => TickOutcome::Advanced,
            TaskStatus::Completed => {
                self.active = None;
                self.completed_runs += 1;
                TickOutcome::Completed
            }
        }
    }
}
