//! Application State — zentrale Datenhaltung.

mod app_state;
mod selection;
mod store;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use store::{CommandOutcome, EntityStore};
pub use view::ViewState;
