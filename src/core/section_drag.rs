//! Drag-Zustandsautomat für einzelne Sektionen.
//!
//! `Idle → Dragging` bei Primär-Klick auf eine Sektion, zurück zu `Idle`
//! beim Loslassen. Es gibt keinen Abbruch-Übergang.
//!
//! Die Zielposition wird direkt in Screen-Pixeln berechnet und NICHT durch
//! die Viewport-Skala geteilt: bei 200 % Zoom bewegt sich die Sektion auf dem
//! Bildschirm doppelt so schnell wie der Zeiger.
//!
//! Zeiger kommen als `Vec2` (Screen, f32), Positionen sind `DVec2` (Modell).

use glam::{DVec2, Vec2};

/// Zustand des Sektions-Drags
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SectionDrag {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Sektion wird gezogen
    Dragging {
        /// ID der gezogenen Sektion
        section_id: String,
        /// `pointer_start - position_start`
        anchor: DVec2,
    },
}

impl SectionDrag {
    /// Startet einen Drag für die Sektion an `position`.
    pub fn begin(section_id: impl Into<String>, pointer: Vec2, position: DVec2) -> Self {
        Self::Dragging {
            section_id: section_id.into(),
            anchor: pointer.as_dvec2() - position,
        }
    }

    /// Zielposition für die aktuelle Pointer-Position (`pointer - anker`).
    pub fn target_position(&self, pointer: Vec2) -> Option<(&str, DVec2)> {
        match self {
            Self::Idle => None,
            Self::Dragging { section_id, anchor } => Some((section_id.as_str(), pointer.as_dvec2() - *anchor)),
        }
    }

    /// Beendet den Drag.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Läuft gerade ein Drag?
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// ID der gezogenen Sektion.
    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { section_id, .. } => Some(section_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_by_pointer_delta() {
        let drag = SectionDrag::begin("sec", Vec2::new(150.0, 120.0), DVec2::new(100.0, 100.0));
        let (id, target) = drag
            .target_position(Vec2::new(200.0, 100.0))
            .expect("Drag aktiv");
        assert_eq!(id, "sec");
        assert_eq!(target, DVec2::new(150.0, 80.0));
    }

    #[test]
    fn idle_has_no_target() {
        let mut drag = SectionDrag::begin("sec", Vec2::ZERO, DVec2::ZERO);
        assert!(drag.is_dragging());
        drag.end();
        assert_eq!(drag, SectionDrag::Idle);
        assert!(drag.target_position(Vec2::ONE).is_none());
        assert!(drag.section_id().is_none());
    }
}
