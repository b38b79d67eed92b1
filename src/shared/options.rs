//! Zentrale Konfiguration für den Seat Map Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Sitzplan ────────────────────────────────────────────────────────

/// Name eines neuen, leeren Sitzplans.
pub const DEFAULT_MAP_NAME: &str = "untitled";
/// Startposition neu angelegter Sektionen (Modell-Koordinaten).
pub const SECTION_DEFAULT_POSITION: [f64; 2] = [100.0, 100.0];
/// Farbe neuer Sektionen, wenn der Dialog keine liefert.
pub const SECTION_DEFAULT_COLOR: &str = "#3b82f6";
/// Horizontaler Abstand zweier Sitze in einer Reihe.
pub const SEAT_SPACING: f64 = 30.0;
/// Maximale Anzahl Reihen pro Batch.
pub const MAX_ROWS_PER_BATCH: u32 = 50;
/// Maximale Anzahl Sitze pro Reihe.
pub const MAX_SEATS_PER_ROW: u32 = 100;

// ── Viewport ────────────────────────────────────────────────────────

/// Minimale Zoom-Skala.
pub const VIEWPORT_SCALE_MIN: f32 = 0.5;
/// Maximale Zoom-Skala.
pub const VIEWPORT_SCALE_MAX: f32 = 2.0;
/// Skalen-Änderung pro Wheel-Pixel.
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 0.001;
/// Pixel pro Wheel-"Zeile" (egui `MouseWheelUnit::Line`).
pub const WHEEL_LINE_PX: f32 = 40.0;
/// Pixel pro Wheel-"Seite" (egui `MouseWheelUnit::Page`).
pub const WHEEL_PAGE_PX: f32 = 800.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `seat_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Sitzplan ────────────────────────────────────────────────
    /// Name neuer Sitzpläne (Reset, Start)
    pub default_map_name: String,
    /// Startposition neuer Sektionen
    pub section_default_position: [f64; 2],
    /// Sektionsfarbe bei leerer Dialog-Eingabe
    pub section_default_color: String,
    /// Sitzabstand innerhalb einer Reihe
    pub seat_spacing: f64,
    /// Obergrenze Reihen pro Batch (Dialog-Validierung)
    pub max_rows_per_batch: u32,
    /// Obergrenze Sitze pro Reihe (Dialog-Validierung)
    pub max_seats_per_row: u32,

    // ── Viewport ────────────────────────────────────────────────
    /// Minimale Zoom-Skala
    pub viewport_scale_min: f32,
    /// Maximale Zoom-Skala
    pub viewport_scale_max: f32,
    /// Skalen-Änderung pro Wheel-Pixel
    pub wheel_zoom_sensitivity: f32,
    /// Pixel pro Wheel-Zeile
    #[serde(default = "default_wheel_line_px")]
    pub wheel_line_px: f32,
    /// Pixel pro Wheel-Seite
    #[serde(default = "default_wheel_page_px")]
    pub wheel_page_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_map_name: DEFAULT_MAP_NAME.to_string(),
            section_default_position: SECTION_DEFAULT_POSITION,
            section_default_color: SECTION_DEFAULT_COLOR.to_string(),
            seat_spacing: SEAT_SPACING,
            max_rows_per_batch: MAX_ROWS_PER_BATCH,
            max_seats_per_row: MAX_SEATS_PER_ROW,

            viewport_scale_min: VIEWPORT_SCALE_MIN,
            viewport_scale_max: VIEWPORT_SCALE_MAX,
            wheel_zoom_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            wheel_line_px: WHEEL_LINE_PX,
            wheel_page_px: WHEEL_PAGE_PX,
        }
    }
}

fn default_wheel_line_px() -> f32 {
    WHEEL_LINE_PX
}

fn default_wheel_page_px() -> f32 {
    WHEEL_PAGE_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
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
            .unwrap_or_else(|_| std::path::PathBuf::from("seat_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("seat_map_editor.toml")
    }

    /// Startposition neuer Sektionen als Vektor.
    pub fn section_default_position(&self) -> DVec2 {
        DVec2::from(self.section_default_position)
    }

    /// Zoom-Grenzen `(min, max)`; vertauschte Werte aus der Datei werden sortiert.
    pub fn zoom_limits(&self) -> (f32, f32) {
        let (a, b) = (self.viewport_scale_min, self.viewport_scale_max);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dialog_values() {
        let opts = EditorOptions::default();
        assert_eq!(opts.default_map_name, "untitled");
        assert_eq!(opts.section_default_position(), DVec2::new(100.0, 100.0));
        assert_eq!(opts.section_default_color, "#3b82f6");
        assert_eq!(opts.zoom_limits(), (0.5, 2.0));
    }

    #[test]
    fn toml_roundtrip_and_missing_optional_fields() {
        let opts = EditorOptions::default();
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("lesbar");
        assert_eq!(back, opts);

        let trimmed: String = text
            .lines()
            .filter(|l| !l.starts_with("wheel_line_px") && !l.starts_with("wheel_page_px"))
            .collect::<Vec<_>>()
            .join("\n");
        let back: EditorOptions = toml::from_str(&trimmed).expect("lesbar ohne Wheel-Felder");
        assert_eq!(back.wheel_line_px, WHEEL_LINE_PX);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("seat_map_editor_does_not_exist.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn swapped_zoom_limits_are_sorted() {
        let opts = EditorOptions {
            viewport_scale_min: 3.0,
            viewport_scale_max: 0.25,
            ..Default::default()
        };
        assert_eq!(opts.zoom_limits(), (0.25, 3.0));
    }
}
