//! Wheel-Zoom (nur mit Ctrl/Cmd).

use super::InputState;
use crate::app::AppIntent;
use crate::core::GestureModifiers;
use crate::shared::EditorOptions;

impl InputState {
    /// Erzeugt einen Zoom-Intent, falls ein Zoom-Modifier gehalten wird.
    ///
    /// egui liefert die Inhaltsbewegung (positiv = nach oben scrollen);
    /// der Intent erwartet die DOM-Konvention in Pixeln (positiv = nach unten).
    pub(super) fn handle_wheel(
        &mut self,
        unit: egui::MouseWheelUnit,
        delta: egui::Vec2,
        modifiers: GestureModifiers,
        options: &EditorOptions,
        intents: &mut Vec<AppIntent>,
    ) {
        if !modifiers.zoom_held() || delta.y == 0.0 {
            return;
        }
        intents.push(AppIntent::ZoomWheel {
            delta_y: wheel_delta_px(unit, delta.y, options),
        });
    }
}

/// egui-Wheel-Delta → DOM-`deltaY` in Pixeln.
pub(super) fn wheel_delta_px(unit: egui::MouseWheelUnit, delta_y: f32, options: &EditorOptions) -> f32 {
    let px_per_unit = match unit {
        egui::MouseWheelUnit::Point => 1.0,
        egui::MouseWheelUnit::Line => options.wheel_line_px,
        egui::MouseWheelUnit::Page => options.wheel_page_px,
    };
    -delta_y * px_per_unit
}
