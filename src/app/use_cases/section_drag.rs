//! Use-Case-Funktionen für den Sektions-Drag und das Gesten-Ende.

use crate::app::{AppState, CommandOutcome};
use crate::core::SectionDrag;
use glam::Vec2;

/// Wählt die Sektion aus und startet ihren Drag an der aktuellen Position.
///
/// Fehlt die Sektion, bleiben Auswahl und Drag-Zustand unverändert.
pub fn begin(state: &mut AppState, section_id: &str, pointer: Vec2) -> CommandOutcome {
    let Some(section) = state.map().section(section_id) else {
        log::debug!("Drag-Start auf unbekannte Sektion {}", section_id);
        return CommandOutcome::TargetMissing;
    };
    let drag = SectionDrag::begin(section_id, pointer, section.position);
    log::debug!("Sektions-Drag gestartet: {}", section_id);
    state.view.section_drag = drag;
    state.store.selection.selected_section_id = Some(section_id.to_string());
    CommandOutcome::Applied
}

/// Beendet jede laufende Geste (Taste losgelassen). Kein Abbruch-Übergang.
pub fn end_gesture(state: &mut AppState) {
    state.view.viewport.end_pan();
    state.view.section_drag.end();
}
