//! Trajektorien-Animation: frame-getriebene Tasks und ihr Scheduler.
//!
//! Ein Task ist ein fortsetzbarer Zustandsautomat. Der Scheduler weckt ihn
//! einmal pro Frame mit der Deltazeit; abgeschlossene Tasks melden sich
//! selbst ab, Abbrechen bedeutet Abmelden.

mod scheduler;
mod task;

pub use scheduler::{FrameScheduler, TickOutcome};
pub use task::{TaskStatus, TrajectoryMode, TrajectorySpec, TrajectoryTask};
