//! Handler für Viewport und Canvas-Gesten.

use crate::app::use_cases;
use crate::app::{AppState, CommandOutcome};
use glam::Vec2;

/// Wheel-Zoom.
pub fn zoom_by_wheel(state: &mut AppState, delta_y: f32) {
    use_cases::viewport::zoom_by_wheel(state, delta_y);
}

/// Startet eine Pan-Geste.
pub fn begin_pan(state: &mut AppState, pointer: Vec2) {
    use_cases::viewport::begin_pan(state, pointer);
}

/// Führt den Pan nach.
pub fn update_pan(state: &mut AppState, pointer: Vec2) {
    use_cases::viewport::update_pan(state, pointer);
}

/// Startet einen Sektions-Drag.
pub fn begin_section_drag(state: &mut AppState, section_id: &str, pointer: Vec2) -> CommandOutcome {
    use_cases::section_drag::begin(state, section_id, pointer)
}

/// Beendet Pan bzw. Drag.
pub fn end_gesture(state: &mut AppState) {
    use_cases::section_drag::end_gesture(state);
}

/// Setzt Zoom und Pan zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::viewport::reset(state);
}
