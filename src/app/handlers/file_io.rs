//! Handler für Import und Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MapData;

/// Installiert einen bereits dekodierten Plan.
pub fn import_map(state: &mut AppState, map: MapData) {
    use_cases::editing::import_map(state, map);
}

/// Dekodiert Dokument-Text und importiert ihn; Fehler lassen den Store unberührt.
pub fn import_document(state: &mut AppState, text: &str) -> anyhow::Result<()> {
    use_cases::file_io::import_document(state, text)
}

/// Lädt einen Sitzplan aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::load_file(state, path)
}

/// Speichert den aktuellen Sitzplan unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}
