//! Use-Case-Funktionen für Sitzplan-Editing.
//!
//! Aufgeteilt nach Ebene:
//! - `map` — Plan-Name, Import, Reset
//! - `sections` — Sektionen anlegen, ändern, drehen, löschen
//! - `rows` — Reihen anlegen (einzeln/Stapel), ändern, löschen
//! - `seats` — Sitze ändern, Belegung umschalten
//!
//! Fehlende Ziel-IDs sind kein Fehler: der Baum bleibt unverändert und der
//! Aufrufer erhält `CommandOutcome::TargetMissing`.

mod map;
mod rows;
mod seats;
mod sections;

pub use map::{import_map, reset_map, set_map_name};
pub use rows::{add_row, add_row_batch, delete_row, update_row};
pub use seats::{toggle_seat_occupancy, update_seat};
pub use sections::{add_section, create_section, delete_section, rotate_section, update_section};

use crate::app::CommandOutcome;

/// Loggt einen referenziellen No-Op.
fn log_missing(outcome: CommandOutcome, what: &str, id: &str) -> CommandOutcome {
    if !outcome.is_applied() {
        log::debug!("{} '{}' nicht gefunden, Sitzplan unverändert", what, id);
    }
    outcome
}
