//! Handler für Sitzplan-Editing (Plan, Sektionen, Reihen, Sitze).

use crate::app::use_cases;
use crate::app::{AppState, CommandOutcome};
use crate::core::{Row, RowBatch, RowPatch, SeatPatch, Section, SectionPatch};

/// Setzt den Plan-Namen.
pub fn set_map_name(state: &mut AppState, name: String) -> CommandOutcome {
    use_cases::editing::set_map_name(state, name)
}

/// Legt eine Sektion aus Dialog-Eingaben an.
pub fn create_section(state: &mut AppState, label: String, color: String) -> CommandOutcome {
    use_cases::editing::create_section(state, label, color);
    CommandOutcome::Applied
}

/// Hängt eine fertige Sektion an.
pub fn add_section(state: &mut AppState, section: Section) -> CommandOutcome {
    use_cases::editing::add_section(state, section);
    CommandOutcome::Applied
}

pub fn update_section(state: &mut AppState, section_id: &str, patch: &SectionPatch) -> CommandOutcome {
    use_cases::editing::update_section(state, section_id, patch)
}

pub fn delete_section(state: &mut AppState, section_id: &str) -> CommandOutcome {
    use_cases::editing::delete_section(state, section_id)
}

/// 90°-Schritt (Rotate-Button).
pub fn rotate_section(state: &mut AppState, section_id: &str) -> CommandOutcome {
    use_cases::editing::rotate_section(state, section_id)
}

/// Legt einen Reihen-Stapel an.
pub fn add_rows(state: &mut AppState, section_id: &str, batch: &RowBatch) -> CommandOutcome {
    use_cases::editing::add_row_batch(state, section_id, batch)
}

pub fn add_row(state: &mut AppState, section_id: &str, row: Row) -> CommandOutcome {
    use_cases::editing::add_row(state, section_id, row)
}

pub fn update_row(
    state: &mut AppState,
    section_id: &str,
    row_id: &str,
    patch: &RowPatch,
) -> CommandOutcome {
    use_cases::editing::update_row(state, section_id, row_id, patch)
}

pub fn delete_row(state: &mut AppState, section_id: &str, row_id: &str) -> CommandOutcome {
    use_cases::editing::delete_row(state, section_id, row_id)
}

pub fn update_seat(
    state: &mut AppState,
    section_id: &str,
    row_id: &str,
    seat_id: &str,
    patch: &SeatPatch,
) -> CommandOutcome {
    use_cases::editing::update_seat(state, section_id, row_id, seat_id, patch)
}

/// Invertiert die Belegung eines Sitzes.
pub fn toggle_seat_occupancy(
    state: &mut AppState,
    section_id: &str,
    row_id: &str,
    seat_id: &str,
) -> CommandOutcome {
    use_cases::editing::toggle_seat_occupancy(state, section_id, row_id, seat_id)
}

/// Installiert einen leeren Plan.
pub fn reset_map(state: &mut AppState) {
    use_cases::editing::reset_map(state);
}
