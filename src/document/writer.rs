//! Writer für Sitzplan-Dokumente.

use super::DocumentError;
use crate::core::MapData;

/// Dateiendung für exportierte Sitzpläne.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Serialisiert einen Snapshot als eingerücktes JSON (zwei Leerzeichen).
///
/// Nicht-endliche Zahlen werden abgelehnt statt als `null` geschrieben.
pub fn write_map_document(map: &MapData) -> Result<String, DocumentError> {
    super::ensure_finite(map)?;
    serde_json::to_string_pretty(map).map_err(DocumentError::Encode)
}

/// Vorgeschlagener Dateiname: `<name>.json`.
pub fn suggested_file_name(map: &MapData) -> String {
    format!("{}.{}", map.name, DOCUMENT_EXTENSION)
}
