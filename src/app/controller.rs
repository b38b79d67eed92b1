//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState, CommandOutcome};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Das Ergebnis fasst alle Commands zusammen: `TargetMissing`, sobald
    /// einer davon sein Ziel nicht gefunden hat.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<CommandOutcome> {
        let commands = self.map_intent_to_commands(state, intent);
        let mut outcome = CommandOutcome::Applied;
        for command in commands {
            outcome = outcome.and(self.handle_command(state, command)?);
        }

        Ok(outcome)
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<CommandOutcome> {
        state.command_log.record(command.clone());
        use super::handlers;
        use CommandOutcome::Applied;

        let outcome = match command {
            // === Sitzplan ===
            AppCommand::SetMapName { name } => handlers::editing::set_map_name(state, name),
            AppCommand::CreateSection { label, color } => {
                handlers::editing::create_section(state, label, color)
            }
            AppCommand::AddSection { section } => handlers::editing::add_section(state, section),
            AppCommand::UpdateSection { section_id, patch } => {
                handlers::editing::update_section(state, &section_id, &patch)
            }
            AppCommand::DeleteSection { section_id } => {
                handlers::editing::delete_section(state, &section_id)
            }
            AppCommand::RotateSection { section_id } => {
                handlers::editing::rotate_section(state, &section_id)
            }
            AppCommand::AddRows { section_id, batch } => {
                handlers::editing::add_rows(state, &section_id, &batch)
            }
            AppCommand::AddRow { section_id, row } => {
                handlers::editing::add_row(state, &section_id, row)
            }
            AppCommand::UpdateRow {
                section_id,
                row_id,
                patch,
            } => handlers::editing::update_row(state, &section_id, &row_id, &patch),
            AppCommand::DeleteRow { section_id, row_id } => {
                handlers::editing::delete_row(state, &section_id, &row_id)
            }
            AppCommand::UpdateSeat {
                section_id,
                row_id,
                seat_id,
                patch,
            } => handlers::editing::update_seat(state, &section_id, &row_id, &seat_id, &patch),
            AppCommand::ToggleSeatOccupancy {
                section_id,
                row_id,
                seat_id,
            } => handlers::editing::toggle_seat_occupancy(state, &section_id, &row_id, &seat_id),

            // === Selektion ===
            AppCommand::SelectSection { section_id } => {
                handlers::selection::select_section(state, section_id);
                Applied
            }
            AppCommand::SelectRow { row_id } => {
                handlers::selection::select_row(state, row_id);
                Applied
            }
            AppCommand::ToggleSeatSelection { seat_id } => {
                handlers::selection::toggle_seat(state, &seat_id);
                Applied
            }
            AppCommand::ClearSeatSelection => {
                handlers::selection::clear_seats(state);
                Applied
            }

            // === Import/Export ===
            AppCommand::ImportMap { map } => {
                handlers::file_io::import_map(state, map);
                Applied
            }
            AppCommand::ImportDocument { text } => {
                handlers::file_io::import_document(state, &text)?;
                Applied
            }
            AppCommand::LoadFile { path } => {
                handlers::file_io::load(state, &path)?;
                Applied
            }
            AppCommand::SaveFile { path } => {
                handlers::file_io::save(state, &path)?;
                Applied
            }
            AppCommand::ResetMap => {
                handlers::editing::reset_map(state);
                Applied
            }

            // === Canvas ===
            AppCommand::BeginPan { pointer } => {
                handlers::view::begin_pan(state, pointer);
                Applied
            }
            AppCommand::UpdatePan { pointer } => {
                handlers::view::update_pan(state, pointer);
                Applied
            }
            AppCommand::BeginSectionDrag {
                section_id,
                pointer,
            } => handlers::view::begin_section_drag(state, &section_id, pointer),
            AppCommand::EndGesture => {
                handlers::view::end_gesture(state);
                Applied
            }
            AppCommand::ZoomByWheel { delta_y } => {
                handlers::view::zoom_by_wheel(state, delta_y);
                Applied
            }
            AppCommand::ResetView => {
                handlers::view::reset_view(state);
                Applied
            }
        };

        Ok(outcome)
    }
}
