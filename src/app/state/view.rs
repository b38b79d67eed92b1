use crate::core::{SectionDrag, Viewport};

/// View-bezogener Anwendungszustand: Canvas-Transformation und laufende Gesten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Pan/Zoom des Canvas inkl. Pan-Geste
    pub viewport: Viewport,
    /// Drag-Zustand für Sektionen
    pub section_drag: SectionDrag,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (100 %, kein Pan, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }

    /// Läuft gerade eine Geste (Pan oder Sektions-Drag)?
    pub fn gesture_active(&self) -> bool {
        self.viewport.is_panning() || self.section_drag.is_dragging()
    }
}
