//! Core-Domänentypen: Sitzplan-Baum, ID-Vergabe, Viewport und Gesten.

pub mod gesture;
pub mod id;
/// Sitzplan-Datenmodell
///
/// - MapData: Wurzel mit Sektionen
/// - Section: positionierte, drehbare Gruppe von Reihen
/// - Row / Seat: Reihen und einzelne Sitze
pub mod map_data;
mod path;
pub mod row;
pub mod row_batch;
pub mod seat;
pub mod section;
pub mod section_drag;
mod serde_point;
pub mod viewport;

pub use gesture::{classify_press, GestureModifiers, GestureStart, PressButton};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use map_data::MapData;
pub use row::{Row, RowPatch};
pub use row_batch::{RowBatch, ValidationError};
pub use seat::{Seat, SeatPatch};
pub use section::{normalize_rotation, Section, SectionPatch, ROTATION_STEP_DEG};
pub use section_drag::SectionDrag;
pub use viewport::Viewport;
