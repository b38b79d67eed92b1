//! Use-Cases für einzelne Sitze.

use super::log_missing;
use crate::app::{AppState, CommandOutcome};
use crate::core::{Seat, SeatPatch};

/// Übernimmt die gesetzten Patch-Felder in den Sitz.
pub fn update_seat(
    state: &mut AppState,
    section_id: &str,
    row_id: &str,
    seat_id: &str,
    patch: &SeatPatch,
) -> CommandOutcome {
    let outcome = state.store.apply(|map| {
        map.with_seat_updated(section_id, row_id, seat_id, |s| s.merged(patch))
    });
    log_missing(outcome, "Sitz", seat_id)
}

/// Invertiert die Belegung des Sitzes.
pub fn toggle_seat_occupancy(
    state: &mut AppState,
    section_id: &str,
    row_id: &str,
    seat_id: &str,
) -> CommandOutcome {
    let outcome = state
        .store
        .apply(|map| map.with_seat_updated(section_id, row_id, seat_id, Seat::toggled));
    log_missing(outcome, "Sitz", seat_id)
}
