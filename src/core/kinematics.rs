//! Vorwärtskinematik: Richtungen, Winkel und Propagation entlang der Kette.
//!
//! Alle Funktionen arbeiten auf Gelenk-Slices in Kettenreihenfolge und
//! verändern nie die Länge der Kette.

use super::Joint;
use glam::{Quat, Vec3};

/// Lokale Vorwärtsachse eines Gelenks.
pub const FORWARD_AXIS: Vec3 = Vec3::Z;

/// Vorwärtsrichtung einer Orientierung in Weltkoordinaten.
#[inline]
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * FORWARD_AXIS
}

/// Normiert einen Winkel in Grad auf `[0, 360)`.
pub fn wrap_degrees(angle_deg: f32) -> f32 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid liefert bei winzigen negativen Werten exakt 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Orientierung für einen Winkel (Grad) um die gegebene Achse.
///
/// Eine degenerierte Achse fällt auf die Vertikale (+Y) zurück.
pub fn axis_rotation(axis: Vec3, angle_deg: f32) -> Quat {
    let axis = axis.try_normalize().unwrap_or(Vec3::Y);
    Quat::from_axis_angle(axis, angle_deg.to_radians())
}

/// Winkel (Grad, `[0, 360)`) einer Orientierung um die gegebene Achse.
///
/// Anteile um andere Achsen werden ignoriert (Twist-Anteil der Swing-Twist-Zerlegung).
pub fn angle_about_axis(rotation: Quat, axis: Vec3) -> f32 {
    let axis = axis.try_normalize().unwrap_or(Vec3::Y);
    let projection = Vec3::new(rotation.x, rotation.y, rotation.z).dot(axis);
    let twist = 2.0 * projection.atan2(rotation.w);
    wrap_degrees(twist.to_degrees())
}

/// Erfasst die Relativ-Offsets `p[j] - p[j-1]` für alle Gelenke nach `pivot`.
///
/// Der Eintrag `k` gehört zum Gelenk `pivot + 1 + k`.
pub fn capture_offsets(joints: &[Joint], pivot: usize) -> Vec<Vec3> {
    if pivot >= joints.len() {
        return Vec::new();
    }
    joints
        .windows(2)
        .skip(pivot)
        .map(|pair| pair[1].position - pair[0].position)
        .collect()
}

/// Dreht die Teilkette nach `pivot` starr um das Pivot-Gelenk.
///
/// Jede Position wird als `p[j-1] + delta * offset[j]` neu aufgebaut, wobei
/// die Offsets vorher frisch per [`capture_offsets`] erfasst sein müssen.
pub fn propagate_rigid(joints: &mut [Joint], pivot: usize, delta: Quat, offsets: &[Vec3]) {
    for (k, offset) in offsets.iter().enumerate() {
        let j = pivot + 1 + k;
        if j >= joints.len() {
            break;
        }
        let previous = joints[j - 1].position;
        joints[j].position = previous + delta * *offset;
    }
}

/// Baut Positionen ab `start` aus der Vorwärtsrichtung des Vorgängers auf.
///
/// `p[i] = p[i-1] + forward(r[i-1]) * link_lengths[i]` für alle `i >= max(start, 1)`.
/// Fehlende Link-Längen lassen das Gelenk unverändert.
pub fn reconstruct_from(joints: &mut [Joint], start: usize, link_lengths: &[f32]) {
    for i in start.max(1)..joints.len() {
        let Some(&length) = link_lengths.get(i) else {
            continue;
        };
        let previous = &joints[i - 1];
        let position = previous.position + previous.forward() * length;
        joints[i].position = position;
    }
}

/// Abstand jedes Gelenks zu seinem Vorgänger (Basis: 0).
pub fn link_lengths(joints: &[Joint]) -> Vec<f32> {
    let mut lengths = Vec::with_capacity(joints.len());
    if !joints.is_empty() {
        lengths.push(0.0);
    }
    lengths.extend(
        joints
            .windows(2)
            .map(|pair| pair[1].position.distance(pair[0].position)),
    );
    lengths
}
