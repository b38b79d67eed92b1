//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::SectionPatch;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Pan und Sektions-Drag schließen sich aus: ein Gesten-Start während der
/// jeweils anderen Geste ergibt keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapRenameRequested { name } => vec![AppCommand::SetMapName { name }],
        AppIntent::NewMapRequested => vec![AppCommand::ResetMap],
        AppIntent::CreateSectionRequested { label, color } => vec![AppCommand::CreateSection {
            label: label.trim().to_string(),
            color,
        }],
        AppIntent::SectionEdited { section_id, patch } => {
            vec![AppCommand::UpdateSection { section_id, patch }]
        }
        AppIntent::SectionDeleteRequested { section_id } => {
            vec![AppCommand::DeleteSection { section_id }]
        }
        AppIntent::SectionRotateRequested { section_id } => {
            vec![AppCommand::RotateSection { section_id }]
        }
        AppIntent::AddRowsRequested { section_id, batch } => {
            vec![AppCommand::AddRows { section_id, batch }]
        }
        AppIntent::RowEdited {
            section_id,
            row_id,
            patch,
        } => vec![AppCommand::UpdateRow {
            section_id,
            row_id,
            patch,
        }],
        AppIntent::RowDeleteRequested { section_id, row_id } => {
            vec![AppCommand::DeleteRow { section_id, row_id }]
        }
        AppIntent::SeatEdited {
            section_id,
            row_id,
            seat_id,
            patch,
        } => vec![AppCommand::UpdateSeat {
            section_id,
            row_id,
            seat_id,
            patch,
        }],
        AppIntent::SeatOccupancyToggled {
            section_id,
            row_id,
            seat_id,
        } => vec![AppCommand::ToggleSeatOccupancy {
            section_id,
            row_id,
            seat_id,
        }],

        AppIntent::SectionSelected { section_id } => {
            vec![AppCommand::SelectSection { section_id }]
        }
        AppIntent::RowSelected { row_id } => vec![AppCommand::SelectRow { row_id }],
        AppIntent::SeatSelectionToggled { seat_id } => {
            vec![AppCommand::ToggleSeatSelection { seat_id }]
        }
        AppIntent::SeatSelectionCleared => vec![AppCommand::ClearSeatSelection],

        AppIntent::ImportDocumentRequested { text } => vec![AppCommand::ImportDocument { text }],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::ExportFileRequested { path } => vec![AppCommand::SaveFile { path }],

        AppIntent::PanGestureStarted { pointer } => {
            if state.view.gesture_active() {
                vec![]
            } else {
                vec![AppCommand::BeginPan { pointer }]
            }
        }
        AppIntent::SectionPressed {
            section_id,
            pointer,
        } => {
            if state.view.gesture_active() {
                vec![]
            } else {
                vec![AppCommand::BeginSectionDrag {
                    section_id,
                    pointer,
                }]
            }
        }
        AppIntent::PointerMoved { pointer } => {
            if state.view.viewport.is_panning() {
                vec![AppCommand::UpdatePan { pointer }]
            } else if let Some((section_id, position)) =
                state.view.section_drag.target_position(pointer)
            {
                vec![AppCommand::UpdateSection {
                    section_id: section_id.to_string(),
                    patch: SectionPatch::position(position),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => {
            if state.view.gesture_active() {
                vec![AppCommand::EndGesture]
            } else {
                vec![]
            }
        }
        AppIntent::ZoomWheel { delta_y } => vec![AppCommand::ZoomByWheel { delta_y }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
    }
}
