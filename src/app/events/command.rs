use crate::core::{MapData, Row, RowBatch, RowPatch, SeatPatch, Section, SectionPatch};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Sitzplan ────────────────────────────────────────────────
    /// Plan-Namen setzen
    SetMapName { name: String },
    /// Sektion mit frischer ID und Standard-Position anlegen
    CreateSection { label: String, color: String },
    /// Fertige Sektion (ID bereits vergeben) anhängen
    AddSection { section: Section },
    /// Patch auf eine Sektion anwenden
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },
    /// Sektion löschen (inkl. Auswahl-Bereinigung)
    DeleteSection { section_id: String },
    /// Sektion um 90° drehen
    RotateSection { section_id: String },
    /// Reihen-Stapel mit frischen IDs anhängen
    AddRows {
        section_id: String,
        batch: RowBatch,
    },
    /// Fertige Reihe (IDs bereits vergeben) anhängen
    AddRow { section_id: String, row: Row },
    /// Patch auf eine Reihe anwenden
    UpdateRow {
        section_id: String,
        row_id: String,
        patch: RowPatch,
    },
    /// Reihe löschen (inkl. Auswahl-Bereinigung)
    DeleteRow { section_id: String, row_id: String },
    /// Patch auf einen Sitz anwenden
    UpdateSeat {
        section_id: String,
        row_id: String,
        seat_id: String,
        patch: SeatPatch,
    },
    /// Belegung invertieren
    ToggleSeatOccupancy {
        section_id: String,
        row_id: String,
        seat_id: String,
    },

    // ── Auswahl ─────────────────────────────────────────────────
    /// Ausgewählte Sektion setzen
    SelectSection { section_id: Option<String> },
    /// Ausgewählte Reihe setzen
    SelectRow { row_id: Option<String> },
    /// Sitz in der Auswahl umschalten
    ToggleSeatSelection { seat_id: String },
    /// Sitz-Auswahl leeren
    ClearSeatSelection,

    // ── Import/Export ───────────────────────────────────────────
    /// Dekodierten Plan installieren, Auswahl zurücksetzen
    ImportMap { map: MapData },
    /// Dokument-Text dekodieren und importieren
    ImportDocument { text: String },
    /// Datei lesen und importieren
    LoadFile { path: String },
    /// Aktuellen Snapshot als Dokument schreiben
    SaveFile { path: String },
    /// Leeren Plan mit neuer ID installieren
    ResetMap,

    // ── Canvas ──────────────────────────────────────────────────
    /// Pan-Geste am Zeiger starten
    BeginPan { pointer: Vec2 },
    /// Pan auf neue Zeigerposition nachführen
    UpdatePan { pointer: Vec2 },
    /// Sektion auswählen und Drag starten
    BeginSectionDrag { section_id: String, pointer: Vec2 },
    /// Laufende Geste beenden (Pan und Drag)
    EndGesture,
    /// Wheel-Zoom anwenden
    ZoomByWheel { delta_y: f32 },
    /// Viewport zurücksetzen
    ResetView,
}
