//! Trajektorien-Task: frame-getriebene Interpolation der Gelenke auf Zielwinkel.

use crate::core::kinematics::{angle_about_axis, axis_rotation, reconstruct_from, wrap_degrees};
use crate::core::ChainModel;
use glam::{Quat, Vec3};
use std::collections::BTreeMap;

/// Zielwinkel pro Gelenkindex plus Dauer.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySpec {
    /// Zielwinkel in Grad, indexiert nach Kettenindex
    pub targets: BTreeMap<usize, f32>,
    /// Dauer in Sekunden (> 0)
    pub duration: f32,
}

/// Ablaufstrategie einer Trajektorie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrajectoryMode {
    /// Alle Gelenke interpolieren im selben Zeitfenster
    #[default]
    Coordinated,
    /// Ein Gelenk nach dem anderen, jedes mit voller Dauer
    Sequential,
}

/// Ergebnis eines einzelnen Resume-Schritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task läuft im nächsten Frame weiter
    Running,
    /// Alle Gelenke stehen exakt auf ihrem Ziel
    Completed,
}

#[derive(Debug, Clone, Copy)]
struct JointTarget {
    index: usize,
    angle_deg: f32,
    rotation: Quat,
}

/// Fortsetzbarer Task, den der [`super::FrameScheduler`] einmal pro Frame weckt.
#[derive(Debug, Clone)]
pub struct TrajectoryTask {
    mode: TrajectoryMode,
    duration: f32,
    axis: Vec3,
    targets: Vec<JointTarget>,
    initial_rotations: Vec<Quat>,
    link_lengths: Vec<f32>,
    elapsed: f32,
    /// Sequenziell: Position in `targets`; koordiniert ungenutzt
    segment: usize,
}

impl TrajectoryTask {
    /// Erfasst Startrotationen und Link-Längen der Kette zum Startzeitpunkt.
    ///
    /// Ziele mit ungültigem Index werden verworfen. Ohne gültiges Ziel gibt es
    /// keinen Task.
    pub fn new(
        chain: &ChainModel,
        spec: &TrajectorySpec,
        mode: TrajectoryMode,
        axis: Vec3,
    ) -> Option<Self> {
        let targets: Vec<JointTarget> = spec
            .targets
            .iter()
            .filter(|(index, _)| chain.contains_index(**index))
            .map(|(&index, &angle_deg)| JointTarget {
                index,
                angle_deg,
                rotation: axis_rotation(axis, angle_deg),
            })
            .collect();

        if targets.is_empty() {
            return None;
        }

        Some(Self {
            mode,
            duration: spec.duration.max(f32::EPSILON),
            axis,
            targets,
            initial_rotations: chain.joints().iter().map(|j| j.rotation).collect(),
            link_lengths: chain.link_lengths(),
            elapsed: 0.0,
            segment: 0,
        })
    }

    /// Ablaufstrategie des Tasks.
    pub fn mode(&self) -> TrajectoryMode {
        self.mode
    }

    /// Vergangene Zeit im aktuellen Zeitfenster (Sekunden).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Gelenk, das im sequenziellen Modus gerade animiert wird.
    pub fn active_joint(&self) -> Option<usize> {
        match self.mode {
            TrajectoryMode::Coordinated => None,
            TrajectoryMode::Sequential => self.targets.get(self.segment).map(|t| t.index),
        }
    }

    /// Fortschritt über die gesamte Trajektorie in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let window = (self.elapsed / self.duration).clamp(0.0, 1.0);
        match self.mode {
            TrajectoryMode::Coordinated => window,
            TrajectoryMode::Sequential => {
                ((self.segment as f32 + window) / self.targets.len() as f32).clamp(0.0, 1.0)
            }
        }
    }

    /// Setzt den Task um `dt` Sekunden fort.
    pub fn resume(&mut self, chain: &mut ChainModel, dt: f32) -> TaskStatus {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.mode {
            TrajectoryMode::Coordinated => self.resume_coordinated(chain, dt),
            TrajectoryMode::Sequential => self.resume_sequential(chain, dt),
        }
    }

    fn resume_coordinated(&mut self, chain: &mut ChainModel, dt: f32) -> TaskStatus {
        self.elapsed += dt;

        if self.elapsed >= self.duration {
            for target in &self.targets {
                snap(chain, target);
            }
            reconstruct_from(chain.joints_mut(), 1, &self.link_lengths);
            return TaskStatus::Completed;
        }

        let t = self.elapsed / self.duration;
        for target in &self.targets {
            self.interpolate(chain, target, t);
        }
        reconstruct_from(chain.joints_mut(), 1, &self.link_lengths);
        TaskStatus::Running
    }

    fn resume_sequential(&mut self, chain: &mut ChainModel, dt: f32) -> TaskStatus {
        let Some(target) = self.targets.get(self.segment).copied() else {
            return TaskStatus::Completed;
        };

        self.elapsed += dt;

        if self.elapsed >= self.duration {
            snap(chain, &target);
            reconstruct_from(chain.joints_mut(), target.index, &self.link_lengths);

            self.segment += 1;
            self.elapsed = 0.0;
            if let Some(next) = self.targets.get(self.segment) {
                // Das nächste Segment startet von der Rotation, die das Gelenk jetzt hat
                if let Some(joint) = chain.get(next.index) {
                    self.initial_rotations[next.index] = joint.rotation;
                }
                return TaskStatus::Running;
            }
            return TaskStatus::Completed;
        }

        let t = self.elapsed / self.duration;
        self.interpolate(chain, &target, t);
        reconstruct_from(chain.joints_mut(), target.index, &self.link_lengths);
        TaskStatus::Running
    }

    fn interpolate(&self, chain: &mut ChainModel, target: &JointTarget, t: f32) {
        let Some(&from) = self.initial_rotations.get(target.index) else {
            return;
        };
        let rotation = from.slerp(target.rotation, t);
        chain.set_rotation(target.index, rotation, angle_about_axis(rotation, self.axis));
    }
}

/// Setzt ein Gelenk exakt auf seinen Zielwinkel.
fn snap(chain: &mut ChainModel, target: &JointTarget) {
    chain.set_rotation(target.index, target.rotation, wrap_degrees(target.angle_deg));
}
