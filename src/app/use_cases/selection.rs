//! Use-Case-Funktionen für die Auswahl von Sektionen, Reihen und Sitzen.
//!
//! Die Setter prüfen nicht, ob die ID im Baum existiert; Auswahl-Einträge
//! sind schwache Referenzen und werden beim Löschen bereinigt.

use crate::app::AppState;

/// Setzt die ausgewählte Sektion (`None` = abwählen).
pub fn select_section(state: &mut AppState, section_id: Option<String>) {
    state.store.selection.selected_section_id = section_id;
}

/// Setzt die ausgewählte Reihe (`None` = abwählen).
pub fn select_row(state: &mut AppState, row_id: Option<String>) {
    state.store.selection.selected_row_id = row_id;
}

/// Schaltet einen Sitz in der Auswahl um.
pub fn toggle_seat(state: &mut AppState, seat_id: &str) {
    let selected = state.store.selection.toggle_seat(seat_id);
    log::debug!(
        "Sitz {} {}",
        seat_id,
        if selected { "ausgewählt" } else { "abgewählt" }
    );
}

/// Leert die Sitz-Auswahl.
pub fn clear_seats(state: &mut AppState) {
    state.store.selection.clear_seats();
}
