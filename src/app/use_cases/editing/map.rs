//! Use-Cases auf Plan-Ebene: Name, Import, Reset.

use crate::app::{AppState, CommandOutcome};
use crate::core::MapData;

/// Setzt den Plan-Namen; Sektionen bleiben referenzgleich.
pub fn set_map_name(state: &mut AppState, name: String) -> CommandOutcome {
    state.store.apply(|map| Some(map.with_name(name)))
}

/// Ersetzt den Plan komplett und leert die Auswahl.
///
/// Es findet keine Strukturprüfung statt.
pub fn import_map(state: &mut AppState, map: MapData) {
    log::info!(
        "Sitzplan importiert: '{}' ({} Sektionen, {} Sitze)",
        map.name,
        map.sections.len(),
        map.seat_count()
    );
    state.store.replace(map);
    state.store.selection.clear();
}

/// Installiert einen leeren Plan mit neuer ID und Standard-Namen.
pub fn reset_map(state: &mut AppState) {
    let id = state.next_id();
    let map = MapData::new(id, state.options.default_map_name.clone());
    log::info!("Neuer Sitzplan: {}", map.id);
    state.store.replace(map);
    state.store.selection.clear();
}
