use super::SelectionState;
use crate::core::MapData;
use std::sync::Arc;

/// Ergebnis eines ausgeführten Commands für den Notification-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Command wurde angewendet
    Applied,
    /// Ziel-ID existiert nicht; Baum und Auswahl unverändert
    TargetMissing,
}

impl CommandOutcome {
    /// Fasst zwei Ergebnisse zusammen; `TargetMissing` gewinnt.
    pub fn and(self, other: CommandOutcome) -> CommandOutcome {
        match (self, other) {
            (CommandOutcome::Applied, CommandOutcome::Applied) => CommandOutcome::Applied,
            _ => CommandOutcome::TargetMissing,
        }
    }

    /// Wurde der Command angewendet?
    pub fn is_applied(self) -> bool {
        self == CommandOutcome::Applied
    }
}

/// Einzige Quelle der Wahrheit: aktueller Snapshot plus Auswahl.
///
/// Snapshots sind unveränderlich; jede Mutation installiert einen neuen
/// `Arc<MapData>`. Wer einen alten Snapshot hält (Renderer, Export), sieht
/// ihn unverändert.
#[derive(Debug, Clone)]
pub struct EntityStore {
    map: Arc<MapData>,
    /// Auswahl (schwache Referenzen per ID)
    pub selection: SelectionState,
}

impl EntityStore {
    /// Erstellt einen Store mit gegebenem Start-Snapshot und leerer Auswahl.
    pub fn new(map: MapData) -> Self {
        Self {
            map: Arc::new(map),
            selection: SelectionState::new(),
        }
    }

    /// Read-only Sicht auf den aktuellen Snapshot.
    pub fn current(&self) -> &MapData {
        &self.map
    }

    /// Geteilter Handle auf den aktuellen Snapshot (O(1)).
    pub fn snapshot(&self) -> Arc<MapData> {
        Arc::clone(&self.map)
    }

    /// Tauscht den Snapshot atomar aus und liefert den vorherigen zurück.
    ///
    /// Die Auswahl bleibt unberührt; Import/Reset leeren sie selbst.
    pub fn replace(&mut self, next: MapData) -> Arc<MapData> {
        std::mem::replace(&mut self.map, Arc::new(next))
    }

    /// Wendet eine reine Baum-Funktion an. `None` lässt den Snapshot stehen.
    pub fn apply(&mut self, update: impl FnOnce(&MapData) -> Option<MapData>) -> CommandOutcome {
        match update(&self.map) {
            Some(next) => {
                self.map = Arc::new(next);
                CommandOutcome::Applied
            }
            None => CommandOutcome::TargetMissing,
        }
    }
}
