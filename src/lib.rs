//! Seat Map Editor Library.
//! Sitzplan-Baum, Mutationen und Canvas-Gesten als Library für Hosts und Tests.

pub mod app;
pub mod core;
pub mod document;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandOutcome, EntityStore, SelectionState,
    ViewState,
};
pub use core::{
    IdGenerator, MapData, Row, RowBatch, RowPatch, Seat, SeatPatch, Section, SectionDrag,
    SectionPatch, SequentialIdGenerator, UuidIdGenerator, ValidationError, Viewport,
};
pub use document::{read_map_document, write_map_document, DocumentError};
pub use shared::EditorOptions;
