//! JSON-Import/Export für Sitzpläne.
//!
//! Das Dokument spiegelt `MapData` exakt wider (ein Objekt mit `id`, `name`
//! und `sections`). Beim Lesen findet nur das typisierte Dekodieren statt,
//! keine weitere Struktur- oder Semantikprüfung. Einzige Ausnahme: alle
//! Zahlen müssen endlich sein, in beide Richtungen. JSON kennt weder `inf`
//! noch `NaN`; serde_json schriebe sie als `null`.

pub mod reader;
pub mod writer;

pub use reader::read_map_document;
pub use writer::{suggested_file_name, write_map_document, DOCUMENT_EXTENSION};

use crate::core::MapData;

/// Fehler an der Dokument-Grenze.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Text ist kein gültiges Sitzplan-Dokument
    #[error("Sitzplan-Dokument konnte nicht gelesen werden: {0}")]
    Decode(#[source] serde_json::Error),
    /// Snapshot konnte nicht serialisiert werden
    #[error("Sitzplan konnte nicht serialisiert werden: {0}")]
    Encode(#[source] serde_json::Error),
    /// Zahl im Baum ist `inf` oder `NaN`
    #[error("Nicht-endlicher Wert in {field} von '{id}'")]
    NonFinite { id: String, field: &'static str },
}

/// Prüft, dass alle Zahlen im Baum endlich sind.
pub(crate) fn ensure_finite(map: &MapData) -> Result<(), DocumentError> {
    let fail = |id: &str, field: &'static str| DocumentError::NonFinite {
        id: id.to_string(),
        field,
    };
    for section in &map.sections {
        let numbers = [
            ("position.x", Some(section.position.x)),
            ("position.y", Some(section.position.y)),
            ("rotation", Some(section.rotation)),
            ("width", section.width),
            ("height", section.height),
            ("curve", section.curve),
        ];
        for (field, value) in numbers {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(fail(&section.id, field));
            }
        }
        for seat in section.rows.iter().flat_map(|row| row.seats.iter()) {
            if !seat.x.is_finite() {
                return Err(fail(&seat.id, "x"));
            }
            if !seat.y.is_finite() {
                return Err(fail(&seat.id, "y"));
            }
        }
    }
    Ok(())
}
