//! Linkage Editor.
//!
//! Interaktiver Editor für Gelenkketten: Aufbau, Regler-Manipulation und
//! Trajektorien-Animation in einer 3D-Ansicht mit egui.

use eframe::egui;
use glam::{Quat, Vec3};
use linkage_editor::{ui, AppController, AppIntent, AppState, ChainOptions, SharedPath};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Linkage Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Linkage Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Linkage Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    path: SharedPath,
    input: ui::ViewportInput,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ChainOptions::config_path();
        let options = ChainOptions::load_from_file(&config_path);

        let path = SharedPath::new();
        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::with_renderer(Box::new(path.clone())),
            path,
            input: ui::ViewportInput::new(),
        };

        // Ohne externe Flächenerkennung steht die Basis im Ursprung
        app.process_events(vec![AppIntent::BasePlaced {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = vec![AppIntent::FrameTick {
            dt: ctx.input(|i| i.stable_dt),
        }];
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::FrameTick { .. }
            )
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_control_panel(ctx, &self.state));

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::SelectionClearRequested);
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            events.push(AppIntent::ExitRequested);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                events.extend(self.input.collect_viewport_events(ui, &response, &scene));

                ui::paint_scene(ui.painter(), rect, &scene, &self.path.snapshot());
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.is_animating()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
