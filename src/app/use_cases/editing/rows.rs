//! Use-Cases für Reihen.

use super::log_missing;
use crate::app::{AppState, CommandOutcome};
use crate::core::{Row, RowBatch, RowPatch};
use std::sync::Arc;

/// Hängt eine Reihe mit bereits vergebenen IDs an.
pub fn add_row(state: &mut AppState, section_id: &str, row: Row) -> CommandOutcome {
    let outcome = state.store.apply(|map| map.with_row_added(section_id, row));
    log_missing(outcome, "Sektion", section_id)
}

/// Erzeugt die Reihen eines Dialog-Stapels und hängt sie der Reihe nach an.
///
/// Der Stapel wird hier nicht validiert (siehe `RowBatch::validate`).
pub fn add_row_batch(state: &mut AppState, section_id: &str, batch: &RowBatch) -> CommandOutcome {
    if state.map().section(section_id).is_none() {
        return log_missing(CommandOutcome::TargetMissing, "Sektion", section_id);
    }

    let spacing = state.options.seat_spacing;
    let rows = batch.build_rows(state.id_generator(), spacing);
    log::debug!(
        "{} Reihe(n) mit je {} Sitzen für Sektion {}",
        rows.len(),
        batch.seat_count,
        section_id
    );

    rows.into_iter()
        .map(|row| add_row(state, section_id, row))
        .fold(CommandOutcome::Applied, CommandOutcome::and)
}

/// Übernimmt die gesetzten Patch-Felder in die Reihe.
pub fn update_row(
    state: &mut AppState,
    section_id: &str,
    row_id: &str,
    patch: &RowPatch,
) -> CommandOutcome {
    let outcome = state
        .store
        .apply(|map| map.with_row_updated(section_id, row_id, |r| r.merged(patch)));
    log_missing(outcome, "Reihe", row_id)
}

/// Löscht die Reihe samt Sitzen und bereinigt die Auswahl im selben Schritt.
pub fn delete_row(state: &mut AppState, section_id: &str, row_id: &str) -> CommandOutcome {
    let mut removed: Option<Arc<Row>> = None;
    let outcome = state.store.apply(|map| {
        let (next, row) = map.with_row_removed(section_id, row_id)?;
        removed = Some(row);
        Some(next)
    });
    if let Some(row) = removed {
        state.store.selection.forget_row(&row);
    }
    log_missing(outcome, "Reihe", row_id)
}
