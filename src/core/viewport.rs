//! Viewport-Transformation: Pan-Offset und Zoom-Skala für den Canvas.
//!
//! Der Renderer wendet `translate(pan) scale(scale)` mit Ursprung (0,0) an.
//! Pan ist in Screen-Pixeln, die Skala wird bei jedem Update geklemmt.

use crate::shared::options;
use glam::Vec2;

/// Pan/Zoom-Zustand des Canvas inklusive laufender Pan-Geste.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Zoom-Skala (1.0 = 100 %)
    pub scale: f32,
    /// Pan-Offset in Screen-Pixeln
    pub pan: Vec2,
    /// Anker der laufenden Pan-Geste (`pointer_start - pan_start`)
    pan_anchor: Option<Vec2>,
}

impl Viewport {
    /// Minimale Zoom-Skala.
    pub const SCALE_MIN: f32 = options::VIEWPORT_SCALE_MIN;
    /// Maximale Zoom-Skala.
    pub const SCALE_MAX: f32 = options::VIEWPORT_SCALE_MAX;
    /// Skalen-Änderung pro Wheel-Pixel (negativ: runter = raus).
    pub const WHEEL_ZOOM_SENSITIVITY: f32 = options::WHEEL_ZOOM_SENSITIVITY;

    /// Erstellt einen Viewport bei 100 % ohne Pan.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
            pan_anchor: None,
        }
    }

    /// Zoomt per Wheel-Delta (DOM-Konvention: positiv = nach unten scrollen).
    ///
    /// `scale += -sensitivity * delta_y`, danach Klemmung auf `[min, max]`.
    pub fn zoom_by_wheel(&mut self, delta_y: f32, sensitivity: f32, min: f32, max: f32) {
        self.scale = (self.scale - sensitivity * delta_y).clamp(min, max);
    }

    /// Startet eine Pan-Geste an der Pointer-Position.
    pub fn begin_pan(&mut self, pointer: Vec2) {
        self.pan_anchor = Some(pointer - self.pan);
    }

    /// Setzt `pan = pointer - anker`. Ohne laufende Geste: `false`.
    pub fn update_pan(&mut self, pointer: Vec2) -> bool {
        let Some(anchor) = self.pan_anchor else {
            return false;
        };
        self.pan = pointer - anchor;
        true
    }

    /// Beendet die Pan-Geste; `pan` bleibt auf dem letzten Wert.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Läuft gerade eine Pan-Geste?
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Screen-Pixel → Modell-Koordinaten.
    pub fn screen_to_model(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.scale
    }

    /// Modell-Koordinaten → Screen-Pixel.
    pub fn model_to_screen(&self, model: Vec2) -> Vec2 {
        model * self.scale + self.pan
    }

    /// Zurück auf 100 % ohne Pan (beendet auch eine laufende Geste).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
