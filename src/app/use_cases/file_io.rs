//! Use-Case-Funktionen für Import und Export.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use super::editing;
use crate::app::AppState;
use crate::document;
use anyhow::Context;

/// Dekodiert einen Dokument-Text und importiert ihn.
///
/// Bei Dekodier-Fehlern bleibt der Store unverändert.
pub fn import_document(state: &mut AppState, text: &str) -> anyhow::Result<()> {
    let map = document::read_map_document(text)?;
    editing::import_map(state, map);
    Ok(())
}

/// Liest eine Datei und importiert sie.
pub fn load_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path))?;
    import_document(state, &text).with_context(|| format!("Import fehlgeschlagen: {}", path))?;
    log::info!("Datei geladen: {}", path);
    Ok(())
}

/// Serialisiert den aktuellen Snapshot als Dokument-Text.
pub fn export_document(state: &AppState) -> anyhow::Result<String> {
    Ok(document::write_map_document(state.map())?)
}

/// Schreibt den aktuellen Snapshot unter dem angegebenen Pfad.
pub fn save_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let text = export_document(state)?;
    std::fs::write(path, text)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path))?;
    log::info!("Sitzplan gespeichert: {}", path);
    Ok(())
}
