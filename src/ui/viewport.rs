//! 3D-Viewport: Zeichnen der Kette und Maus-Eingaben (Pick, Orbit, Zoom).

use super::color::to_color32;
use crate::app::AppIntent;
use crate::shared::RenderScene;
use glam::{Vec2, Vec3};

/// Radiant pro Pixel beim Orbit-Drag
const ORBIT_SENSITIVITY: f32 = 0.01;
/// Zoom-Faktor pro Scroll-Pixel
const SCROLL_ZOOM_RATE: f32 = 0.0015;

/// Sammelt Viewport-Eingaben und zeichnet die Szene.
#[derive(Debug, Default)]
pub struct ViewportInput {
    last_size: [f32; 2],
}

impl ViewportInput {
    /// Erstellt einen neuen Eingabe-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wertet Klick, Drag und Scroll im Viewport aus.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &RenderScene,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let size = [rect.width(), rect.height()];

        if size != self.last_size {
            self.last_size = size;
            events.push(AppIntent::ViewportResized { size });
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = Vec2::new(pointer.x - rect.min.x, pointer.y - rect.min.y);
                let (ray_origin, ray_direction) = scene
                    .camera
                    .screen_to_ray(local, Vec2::new(size[0], size[1]));
                events.push(AppIntent::JointPickRequested {
                    ray_origin,
                    ray_direction,
                });
            }
        }

        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary)
        {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraOrbit {
                    delta_yaw: -delta.x * ORBIT_SENSITIVITY,
                    delta_pitch: delta.y * ORBIT_SENSITIVITY,
                });
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                events.push(AppIntent::CameraZoom {
                    factor: (scroll * SCROLL_ZOOM_RATE).exp(),
                });
            }
        }

        if response.double_clicked() {
            events.push(AppIntent::ResetCameraRequested);
        }

        events
    }
}

/// Zeichnet Pfad-Polylinie, Gelenke und Richtungsstriche.
///
/// `path` sind die Positionen, die der Path-Renderer zuletzt erhalten hat.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene, path: &[Vec3]) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

    if !scene.has_chain() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Warte auf Platzierung der Basis …",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
        return;
    }

    let size = Vec2::new(rect.width(), rect.height());
    let to_screen = |world: Vec3| {
        let p = scene.camera.world_to_screen(world, size);
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    };

    let points: Vec<egui::Pos2> = path.iter().copied().map(to_screen).collect();
    if points.len() >= 2 {
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(
                scene.options.path_thickness_px,
                to_color32(scene.options.path_color),
            ),
        ));
    }

    let radius_px =
        (scene.options.joint_size * scene.camera.pixels_per_unit(size.y)).clamp(2.0, 40.0);
    for (index, joint) in scene.joints.iter().enumerate() {
        let center = to_screen(joint.position);
        let tip = to_screen(joint.position + joint.forward * scene.options.joint_size * 3.0);
        painter.line_segment(
            [center, tip],
            egui::Stroke::new(1.5, egui::Color32::from_rgb(255, 140, 0)),
        );
        painter.circle_filled(center, radius_px, to_color32(joint.color));
        if scene.selected == Some(index) {
            painter.circle_stroke(
                center,
                radius_px + 3.0,
                egui::Stroke::new(1.5, egui::Color32::WHITE),
            );
        }
        painter.text(
            center + egui::vec2(radius_px + 4.0, -radius_px - 4.0),
            egui::Align2::LEFT_BOTTOM,
            &joint.label,
            egui::FontId::proportional(12.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}
