//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod file_io;
pub mod section_drag;
pub mod selection;
pub mod viewport;
