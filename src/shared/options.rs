//! Zentrale Konfiguration für den Linkage-Editor.
//!
//! `ChainOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kette ───────────────────────────────────────────────────────────

/// Abstand eines neu angehängten Gelenks zum bisherigen Kettenende.
pub const JOINT_SPACING: f32 = 0.1;
/// Schrittweite beim Verlängern/Verkürzen der Kette.
pub const LENGTH_STEP: f32 = 0.1;
/// Maximale kumulierte Verlängerung.
pub const MAX_LENGTH: f32 = 10.0;
/// Start-Wachstumsrichtung neuer Gelenke.
pub const INITIAL_DIRECTION: [f32; 3] = [0.0, 0.0, 1.0];
/// Maximale Tiefe der Längen-History.
pub const HISTORY_DEPTH: usize = 200;

// ── Rotation ────────────────────────────────────────────────────────

/// Standard-Rotationsachse (vertikal).
pub const ROTATION_AXIS: [f32; 3] = [0.0, 1.0, 0.0];
/// Winkelschritt für Schritt-Rotationen in Grad.
pub const ROTATION_STEP_DEG: f32 = 90.0;
/// Grad pro Einheit des Rotations-Reglers (360 × 0.1).
pub const ROTATION_CONTROL_SCALE: f32 = 36.0;

// ── Regler ──────────────────────────────────────────────────────────

/// Wertebereich des Translations-Reglers.
pub const TRANSLATION_RANGE: [f32; 2] = [-5.0, 5.0];
/// Wertebereich des Rotations-Reglers.
pub const ROTATION_RANGE: [f32; 2] = [0.0, 10.0];

// ── Trajektorie ─────────────────────────────────────────────────────

/// Dauer, wenn die Eingabe fehlt oder ungültig ist (Sekunden).
pub const DEFAULT_DURATION: f32 = 1.0;
/// Kleinste erlaubte Dauer (Sekunden).
pub const MIN_DURATION: f32 = 0.1;

// ── Darstellung ─────────────────────────────────────────────────────

/// Standard-Farbe der Gelenke (RGBA: Weiß).
pub const JOINT_COLOR_DEFAULT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des selektierten Gelenks (RGBA: Grün).
pub const JOINT_COLOR_SELECTED: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Gelenkgröße in Welteinheiten.
pub const JOINT_SIZE: f32 = 0.04;
/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;
/// Farbe der Verbindungslinie (RGBA: Cyan).
pub const PATH_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Linienstärke der Verbindungslinie in Pixeln.
pub const PATH_THICKNESS_PX: f32 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Ketten-Optionen.
/// Wird als `linkage_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChainOptions {
    // ── Kette ───────────────────────────────────────────────────
    /// Abstand neuer Gelenke in Welteinheiten
    pub joint_spacing: f32,
    /// Schrittweite für Verlängern/Verkürzen
    pub length_step: f32,
    /// Obergrenze der kumulierten Verlängerung
    pub max_length: f32,
    /// Start-Wachstumsrichtung (wird nicht normiert gespeichert)
    pub initial_direction: [f32; 3],
    /// Maximale Einträge der Längen-History
    pub history_depth: usize,

    // ── Rotation ────────────────────────────────────────────────
    /// Rotationsachse für Regler, Schritt-Rotation und Trajektorie
    pub rotation_axis: [f32; 3],
    /// Winkelschritt in Grad
    pub rotation_step_deg: f32,
    /// Grad pro Einheit des Rotations-Reglers
    pub rotation_control_scale: f32,

    // ── Regler ──────────────────────────────────────────────────
    /// Wertebereich [min, max] des Translations-Reglers
    pub translation_range: [f32; 2],
    /// Wertebereich [min, max] des Rotations-Reglers
    pub rotation_range: [f32; 2],

    // ── Trajektorie ─────────────────────────────────────────────
    /// Fallback-Dauer in Sekunden
    pub default_duration: f32,
    /// Mindestdauer in Sekunden
    pub min_duration: f32,
    /// Koordinierter Modus als Startwert des Umschalters
    pub coordinated_default: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Standard-Farbe der Gelenke
    pub joint_color_default: [f32; 4],
    /// Farbe des selektierten Gelenks
    pub joint_color_selected: [f32; 4],
    /// Gelenkgröße in Welteinheiten
    pub joint_size: f32,
    /// Pick-Radius in Screen-Pixeln
    pub pick_radius_px: f32,
    /// Farbe der Verbindungslinie
    pub path_color: [f32; 4],
    /// Linienstärke der Verbindungslinie in Pixeln
    pub path_thickness_px: f32,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            joint_spacing: JOINT_SPACING,
            length_step: LENGTH_STEP,
            max_length: MAX_LENGTH,
            initial_direction: INITIAL_DIRECTION,
            history_depth: HISTORY_DEPTH,

            rotation_axis: ROTATION_AXIS,
            rotation_step_deg: ROTATION_STEP_DEG,
            rotation_control_scale: ROTATION_CONTROL_SCALE,

            translation_range: TRANSLATION_RANGE,
            rotation_range: ROTATION_RANGE,

            default_duration: DEFAULT_DURATION,
            min_duration: MIN_DURATION,
            coordinated_default: true,

            joint_color_default: JOINT_COLOR_DEFAULT,
            joint_color_selected: JOINT_COLOR_SELECTED,
            joint_size: JOINT_SIZE,
            pick_radius_px: PICK_RADIUS_PX,
            path_color: PATH_COLOR,
            path_thickness_px: PATH_THICKNESS_PX,
        }
    }
}

impl ChainOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("linkage_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("linkage_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte (NaN, unendlich, nicht positiv, vertauschte
    /// Bereiche) durch die `const`-Standardwerte und protokolliert jede Korrektur.
    pub fn sanitized(mut self) -> Self {
        self.joint_spacing =
            positive_or_default("joint_spacing", self.joint_spacing, JOINT_SPACING);
        self.length_step = positive_or_default("length_step", self.length_step, LENGTH_STEP);
        self.max_length = positive_or_default("max_length", self.max_length, MAX_LENGTH);
        self.rotation_step_deg =
            finite_or_default("rotation_step_deg", self.rotation_step_deg, ROTATION_STEP_DEG);
        self.rotation_control_scale = finite_or_default(
            "rotation_control_scale",
            self.rotation_control_scale,
            ROTATION_CONTROL_SCALE,
        );
        self.translation_range =
            range_or_default("translation_range", self.translation_range, TRANSLATION_RANGE);
        self.rotation_range =
            range_or_default("rotation_range", self.rotation_range, ROTATION_RANGE);
        self.default_duration =
            positive_or_default("default_duration", self.default_duration, DEFAULT_DURATION);
        self.min_duration = positive_or_default("min_duration", self.min_duration, MIN_DURATION);
        self.joint_size = positive_or_default("joint_size", self.joint_size, JOINT_SIZE);
        self.pick_radius_px =
            positive_or_default("pick_radius_px", self.pick_radius_px, PICK_RADIUS_PX);
        self.path_thickness_px =
            positive_or_default("path_thickness_px", self.path_thickness_px, PATH_THICKNESS_PX);
        if self.history_depth == 0 {
            log::warn!("Option history_depth = 0 ungültig, verwende {}", HISTORY_DEPTH);
            self.history_depth = HISTORY_DEPTH;
        }
        self
    }

    /// Start-Wachstumsrichtung als normierter Vektor (Fallback: +Z).
    pub fn initial_direction(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.initial_direction)
            .try_normalize()
            .unwrap_or(glam::Vec3::Z)
    }

    /// Rotationsachse als normierter Vektor (Fallback: +Y).
    pub fn rotation_axis(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.rotation_axis)
            .try_normalize()
            .unwrap_or(glam::Vec3::Y)
    }

    /// Begrenzt einen Translations-Reglerwert auf den konfigurierten Bereich.
    pub fn clamp_translation(&self, value: f32) -> f32 {
        clamp_to_range(value, self.translation_range)
    }

    /// Begrenzt einen Rotations-Reglerwert auf den konfigurierten Bereich.
    pub fn clamp_rotation(&self, value: f32) -> f32 {
        clamp_to_range(value, self.rotation_range)
    }
}

/// Klemmt auf `[min, max]`, toleriert vertauschte Grenzen.
/// Eine NaN-Grenze wird ignoriert.
fn clamp_to_range(value: f32, range: [f32; 2]) -> f32 {
    let lo = range[0].min(range[1]);
    let hi = range[0].max(range[1]);
    value.max(lo).min(hi)
}

fn positive_or_default(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Option {} = {} ungültig, verwende {}", name, value, default);
        default
    }
}

fn finite_or_default(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Option {} = {} ungültig, verwende {}", name, value, default);
        default
    }
}

fn range_or_default(name: &str, range: [f32; 2], default: [f32; 2]) -> [f32; 2] {
    if range.iter().all(|v| v.is_finite()) && range[0] <= range[1] {
        range
    } else {
        log::warn!("Option {} = {:?} ungültig, verwende {:?}", name, range, default);
        default
    }
}
