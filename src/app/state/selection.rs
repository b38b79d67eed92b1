use crate::core::{Row, Section};
use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand.
///
/// Alle Einträge sind schwache Referenzen per ID; Löschungen im Baum müssen
/// sie im selben Schritt bereinigen (siehe `forget_section` / `forget_row`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Aktuell ausgewählte Sektion
    pub selected_section_id: Option<String>,
    /// Aktuell ausgewählte Reihe
    pub selected_row_id: Option<String>,
    /// Ausgewählte Sitze in Klick-Reihenfolge (Arc für O(1)-Clone in Render-Szenen)
    pub selected_seat_ids: Arc<IndexSet<String>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf das Seat-Set zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub fn seat_ids_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_seat_ids)
    }

    /// Fügt den Sitz hinzu oder entfernt ihn, falls schon gewählt.
    /// Gibt `true` zurück, wenn der Sitz danach ausgewählt ist.
    pub fn toggle_seat(&mut self, seat_id: &str) -> bool {
        let ids = self.seat_ids_mut();
        if ids.shift_remove(seat_id) {
            false
        } else {
            ids.insert(seat_id.to_string());
            true
        }
    }

    /// Ist der Sitz ausgewählt?
    pub fn is_seat_selected(&self, seat_id: &str) -> bool {
        self.selected_seat_ids.contains(seat_id)
    }

    /// Leert die Sitz-Auswahl.
    pub fn clear_seats(&mut self) {
        if !self.selected_seat_ids.is_empty() {
            self.seat_ids_mut().clear();
        }
    }

    /// Setzt alles zurück (Import, Reset).
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Entfernt alle Referenzen in den Teilbaum einer gelöschten Sektion.
    pub fn forget_section(&mut self, section: &Section) {
        if self.selected_section_id.as_deref() == Some(section.id.as_str()) {
            self.selected_section_id = None;
        }
        for row in &section.rows {
            self.forget_row(row);
        }
    }

    /// Entfernt alle Referenzen in den Teilbaum einer gelöschten Reihe.
    pub fn forget_row(&mut self, row: &Row) {
        if self.selected_row_id.as_deref() == Some(row.id.as_str()) {
            self.selected_row_id = None;
        }
        if row.seats.iter().any(|s| self.selected_seat_ids.contains(&s.id)) {
            let ids = self.seat_ids_mut();
            for seat in &row.seats {
                ids.shift_remove(&seat.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;
    use glam::DVec2;

    #[test]
    fn toggle_seat_adds_then_removes() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle_seat("a"));
        assert!(selection.toggle_seat("b"));
        assert!(!selection.toggle_seat("a"));
        let ids: Vec<&str> = selection.selected_seat_ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn forget_section_clears_nested_references() {
        let row = Row::new("r", "A 1", vec![Seat::new("s1", "A 11", 0.0, 0.0)]);
        let section = Section::new("sec", "A", "#000", DVec2::ZERO).with_row_added(row);

        let mut selection = SelectionState::new();
        selection.selected_section_id = Some("sec".into());
        selection.selected_row_id = Some("r".into());
        selection.toggle_seat("s1");
        selection.toggle_seat("other");

        selection.forget_section(&section);
        assert_eq!(selection.selected_section_id, None);
        assert_eq!(selection.selected_row_id, None);
        assert!(!selection.is_seat_selected("s1"));
        assert!(selection.is_seat_selected("other"));
    }

    #[test]
    fn forget_unrelated_row_keeps_selection() {
        let mut selection = SelectionState::new();
        selection.selected_row_id = Some("keep".into());
        let shared = Arc::clone(&selection.selected_seat_ids);

        selection.forget_row(&Row::new("gone", "X", vec![]));
        assert_eq!(selection.selected_row_id.as_deref(), Some("keep"));
        assert!(Arc::ptr_eq(&shared, &selection.selected_seat_ids));
    }
}
