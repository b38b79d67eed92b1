//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die ausgewählte Sektion.
pub fn select_section(state: &mut AppState, section_id: Option<String>) {
    use_cases::selection::select_section(state, section_id);
}

/// Setzt die ausgewählte Reihe.
pub fn select_row(state: &mut AppState, row_id: Option<String>) {
    use_cases::selection::select_row(state, row_id);
}

/// Schaltet einen Sitz in der Auswahl um.
pub fn toggle_seat(state: &mut AppState, seat_id: &str) {
    use_cases::selection::toggle_seat(state, seat_id);
}

/// Leert die Sitz-Auswahl.
pub fn clear_seats(state: &mut AppState) {
    use_cases::selection::clear_seats(state);
}
