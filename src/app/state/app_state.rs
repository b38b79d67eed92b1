use super::{EntityStore, ViewState};
use crate::app::CommandLog;
use crate::core::{IdGenerator, MapData, UuidIdGenerator};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Sitzplan-Snapshot und Auswahl
    pub store: EntityStore,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Zoom-Grenzen, Dialog-Defaults)
    pub options: EditorOptions,
    /// Einzige Quelle neuer Entity-IDs
    ids: Box<dyn IdGenerator>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Plan und UUID-IDs.
    pub fn new() -> Self {
        Self::with_parts(EditorOptions::default(), Box::new(UuidIdGenerator))
    }

    /// Wie `new`, aber mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self::with_parts(options, Box::new(UuidIdGenerator))
    }

    /// Wie `new`, aber mit eigenem ID-Generator.
    ///
    /// `SequentialIdGenerator` ist nur für Tests gedacht; er kollidiert mit
    /// importierten IDs gleichen Präfixes.
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_parts(EditorOptions::default(), ids)
    }

    /// Erstellt den State aus Optionen und ID-Generator (siehe `with_id_generator`).
    pub fn with_parts(options: EditorOptions, mut ids: Box<dyn IdGenerator>) -> Self {
        let map = MapData::new(ids.next_id(), options.default_map_name.clone());
        Self {
            store: EntityStore::new(map),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options,
            ids,
        }
    }

    /// Vergibt eine neue, sitzungsweit eindeutige ID.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Zugriff auf den Generator (Batch-Erzeugung von Reihen).
    pub fn id_generator(&mut self) -> &mut dyn IdGenerator {
        self.ids.as_mut()
    }

    /// Aktueller Snapshot (read-only).
    pub fn map(&self) -> &MapData {
        self.store.current()
    }

    /// Anzahl Sektionen (für UI-Anzeige)
    pub fn section_count(&self) -> usize {
        self.map().sections.len()
    }

    /// Gesamtzahl der Sitze (für UI-Anzeige)
    pub fn seat_count(&self) -> usize {
        self.map().seat_count()
    }

    /// Anzahl belegter Sitze (für UI-Anzeige)
    pub fn occupied_count(&self) -> usize {
        self.map().occupied_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
