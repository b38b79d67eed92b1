//! UI-Anbindung: Übersetzung von egui-Eingaben in App-Intents.
//!
//! Rendering, Dialoge und Listen liegen beim Host; dieser Layer liefert nur
//! den Input-Adapter für den Canvas.

pub mod input;

pub use input::{InputState, SectionHitTest};
