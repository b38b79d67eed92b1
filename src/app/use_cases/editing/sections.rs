//! Use-Cases für Sektionen.

use super::log_missing;
use crate::app::{AppState, CommandOutcome};
use crate::core::{Section, SectionPatch};
use std::sync::Arc;

/// Legt eine Sektion mit frischer ID an der Standard-Position an.
///
/// Leere Farbe → `options.section_default_color`. Gibt die neue ID zurück.
pub fn create_section(state: &mut AppState, label: String, color: String) -> String {
    let id = state.next_id();
    let position = state.options.section_default_position();
    let color = if color.trim().is_empty() {
        state.options.section_default_color.clone()
    } else {
        color
    };
    add_section(state, Section::new(id.clone(), label, color, position));
    id
}

/// Hängt eine Sektion mit bereits vergebener ID an.
pub fn add_section(state: &mut AppState, section: Section) {
    log::debug!("Sektion '{}' ({}) angelegt", section.label, section.id);
    state
        .store
        .apply(|map| Some(map.with_section_added(section)));
}

/// Übernimmt die gesetzten Patch-Felder in die Sektion.
pub fn update_section(
    state: &mut AppState,
    section_id: &str,
    patch: &SectionPatch,
) -> CommandOutcome {
    let outcome = state
        .store
        .apply(|map| map.with_section_updated(section_id, |s| s.merged(patch)));
    log_missing(outcome, "Sektion", section_id)
}

/// Dreht die Sektion um 90° weiter.
pub fn rotate_section(state: &mut AppState, section_id: &str) -> CommandOutcome {
    let outcome = state
        .store
        .apply(|map| map.with_section_updated(section_id, Section::rotated_step));
    log_missing(outcome, "Sektion", section_id)
}

/// Löscht die Sektion samt Teilbaum und bereinigt die Auswahl im selben Schritt.
pub fn delete_section(state: &mut AppState, section_id: &str) -> CommandOutcome {
    let mut removed: Option<Arc<Section>> = None;
    let outcome = state.store.apply(|map| {
        let (next, section) = map.with_section_removed(section_id)?;
        removed = Some(section);
        Some(next)
    });
    if let Some(section) = removed {
        state.store.selection.forget_section(&section);
    }
    log_missing(outcome, "Sektion", section_id)
}
