use glam::{Quat, Vec3};
use linkage_editor::{AppController, AppIntent, AppState, ChainOptions, PathRenderer};
use std::cell::RefCell;
use std::rc::Rc;

mod editing;
mod manipulation;
mod selection;
mod trajectory;

/// Renderer-Attrappe, die jede Übergabe mitschreibt.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Rc<RefCell<Vec<Vec<Vec3>>>>,
}

impl PathRenderer for RecordingRenderer {
    fn set_positions(&mut self, positions: &[Vec3]) {
        self.calls.borrow_mut().push(positions.to_vec());
    }
}

/// Controller + State mit platzierter Basis im Ursprung.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub renderer: RecordingRenderer,
}

impl Harness {
    pub fn new(options: ChainOptions) -> Self {
        let renderer = RecordingRenderer::default();
        let mut harness = Self {
            controller: AppController::with_renderer(Box::new(renderer.clone())),
            state: AppState::with_options(options),
            renderer,
        };
        harness.state.view.viewport_size = [800.0, 600.0];
        harness.send(AppIntent::BasePlaced {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        });
        harness
    }

    /// Kette entlang +Z mit Gelenkabstand 1 und `joints` angehängten Gelenken.
    pub fn unit_chain(joints: usize) -> Self {
        let options = ChainOptions {
            joint_spacing: 1.0,
            ..ChainOptions::default()
        };
        let mut harness = Self::new(options);
        for _ in 0..joints {
            harness.send(AppIntent::AddJointRequested);
        }
        harness
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte verarbeitet werden");
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.state
            .chain
            .as_ref()
            .map(|chain| chain.positions())
            .unwrap_or_default()
    }

    pub fn angle(&self, index: usize) -> f32 {
        self.state
            .chain
            .as_ref()
            .and_then(|chain| chain.get(index))
            .map(|joint| joint.angle_deg)
            .expect("Gelenk vorhanden")
    }

    pub fn last_rendered(&self) -> Option<Vec<Vec3>> {
        self.renderer.calls.borrow().last().cloned()
    }

    /// Tickt, bis die Trajektorie fertig ist (höchstens `max_ticks`).
    pub fn run_until_idle(&mut self, dt: f32, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while self.state.is_animating() && ticks < max_ticks {
            self.send(AppIntent::FrameTick { dt });
            ticks += 1;
        }
        ticks
    }
}
