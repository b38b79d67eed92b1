//! Reader für Sitzplan-Dokumente.

use super::DocumentError;
use crate::core::MapData;

/// Dekodiert ein Sitzplan-Dokument.
///
/// Fehlende Pflichtfelder oder falsche Typen führen zu
/// [`DocumentError::Decode`], nicht-endliche Zahlen zu
/// [`DocumentError::NonFinite`]. Inhaltlich fragwürdige Werte (doppelte IDs,
/// Rotation außerhalb von `[0, 360)`) werden unverändert übernommen.
pub fn read_map_document(text: &str) -> Result<MapData, DocumentError> {
    let map: MapData = serde_json::from_str(text).map_err(DocumentError::Decode)?;
    super::ensure_finite(&map)?;
    log::debug!(
        "Dokument gelesen: '{}' mit {} Sektionen",
        map.name,
        map.sections.len()
    );
    Ok(map)
}
