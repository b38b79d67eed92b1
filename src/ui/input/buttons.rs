//! Button-Press/-Release: Pan-Start, Sektions-Drag, Gesten-Ende.

use super::{InputState, SectionHitTest};
use crate::app::AppIntent;
use crate::core::{classify_press, GestureModifiers, GestureStart, PressButton};
use glam::Vec2;

impl InputState {
    /// Klassifiziert einen Press und erzeugt den passenden Gesten-Start.
    pub(super) fn handle_press(
        &mut self,
        pointer: Vec2,
        button: PressButton,
        modifiers: GestureModifiers,
        hit_test: &dyn SectionHitTest,
        intents: &mut Vec<AppIntent>,
    ) {
        // Hit-Test nur, wenn er das Ergebnis beeinflussen kann
        let hit = if button == PressButton::Primary && !modifiers.shift {
            hit_test.section_at(pointer)
        } else {
            None
        };

        match classify_press(button, modifiers, hit.as_deref()) {
            GestureStart::Pan => intents.push(AppIntent::PanGestureStarted { pointer }),
            GestureStart::SectionDrag(section_id) => intents.push(AppIntent::SectionPressed {
                section_id,
                pointer,
            }),
            GestureStart::None => {}
        }
    }

    /// Jede losgelassene Taste beendet die laufende Geste.
    pub(super) fn handle_release(&mut self, intents: &mut Vec<AppIntent>) {
        intents.push(AppIntent::PointerReleased);
    }
}
