use crate::core::{RowBatch, RowPatch, SeatPatch, SectionPatch};
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Sitzplan ────────────────────────────────────────────────
    /// Plan umbenennen
    MapRenameRequested { name: String },
    /// Neuen, leeren Plan beginnen
    NewMapRequested,
    /// Sektion aus dem Dialog anlegen (Label wird getrimmt)
    CreateSectionRequested { label: String, color: String },
    /// Sektionsfelder ändern (Dialog, Rotations-Slider)
    SectionEdited {
        section_id: String,
        patch: SectionPatch,
    },
    /// Sektion samt Reihen löschen
    SectionDeleteRequested { section_id: String },
    /// Sektion um 90° weiterdrehen
    SectionRotateRequested { section_id: String },
    /// Reihen-Stapel aus dem Dialog anlegen
    AddRowsRequested {
        section_id: String,
        batch: RowBatch,
    },
    /// Reihenfelder ändern
    RowEdited {
        section_id: String,
        row_id: String,
        patch: RowPatch,
    },
    /// Reihe samt Sitzen löschen
    RowDeleteRequested { section_id: String, row_id: String },
    /// Sitzfelder ändern
    SeatEdited {
        section_id: String,
        row_id: String,
        seat_id: String,
        patch: SeatPatch,
    },
    /// Belegung eines Sitzes umschalten
    SeatOccupancyToggled {
        section_id: String,
        row_id: String,
        seat_id: String,
    },

    // ── Auswahl ─────────────────────────────────────────────────
    /// Sektion auswählen (`None` = abwählen)
    SectionSelected { section_id: Option<String> },
    /// Reihe auswählen (`None` = abwählen)
    RowSelected { row_id: Option<String> },
    /// Sitz zur Auswahl hinzufügen/entfernen
    SeatSelectionToggled { seat_id: String },
    /// Sitz-Auswahl leeren
    SeatSelectionCleared,

    // ── Import/Export ───────────────────────────────────────────
    /// Bereits gelesenen Dokument-Text importieren
    ImportDocumentRequested { text: String },
    /// Datei wurde im Öffnen-Dialog ausgewählt
    ImportFileSelected { path: String },
    /// Speicherpfad wurde im Export-Dialog ausgewählt
    ExportFileRequested { path: String },

    // ── Canvas ──────────────────────────────────────────────────
    /// Pan-Geste beginnt (Mittelklick oder Shift + Primärklick)
    PanGestureStarted { pointer: Vec2 },
    /// Primärklick auf eine Sektion (Auswahl + Drag-Start)
    SectionPressed { section_id: String, pointer: Vec2 },
    /// Zeiger bewegt (Screen-Pixel)
    PointerMoved { pointer: Vec2 },
    /// Beliebige Pointer-Taste losgelassen
    PointerReleased,
    /// Wheel mit Zoom-Modifier (DOM-Konvention: positiv = runter)
    ZoomWheel { delta_y: f32 },
    /// Ansicht auf 100 % ohne Pan zurücksetzen
    ResetViewRequested,
}
