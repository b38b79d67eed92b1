//! Use-Case-Funktionen für Canvas-Zoom und -Pan.

use crate::app::AppState;
use glam::Vec2;

/// Zoomt per Wheel-Delta, geklemmt auf die Grenzen aus den Optionen.
pub fn zoom_by_wheel(state: &mut AppState, delta_y: f32) {
    let (min, max) = state.options.zoom_limits();
    state.view.viewport.zoom_by_wheel(
        delta_y,
        state.options.wheel_zoom_sensitivity,
        min,
        max,
    );
}

/// Startet eine Pan-Geste.
pub fn begin_pan(state: &mut AppState, pointer: Vec2) {
    log::debug!("Pan-Geste gestartet bei {:?}", pointer);
    state.view.viewport.begin_pan(pointer);
}

/// Führt den Pan auf die aktuelle Zeigerposition nach.
pub fn update_pan(state: &mut AppState, pointer: Vec2) {
    state.view.viewport.update_pan(pointer);
}

/// Setzt Zoom und Pan zurück.
pub fn reset(state: &mut AppState) {
    state.view.viewport.reset();
}
