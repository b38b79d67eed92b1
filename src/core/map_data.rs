//! Wurzel des Sitzplans und die reinen Pfad-Update-Funktionen.
//!
//! Jede `with_*`-Methode liefert einen neuen Wert und lässt `self`
//! unangetastet. Neu allokiert wird nur der Pfad Map → Sektion → Reihe → Sitz;
//! alle anderen Teilbäume bleiben per `Arc` referenzgleich. `None` bedeutet:
//! Ziel nicht gefunden, Baum unverändert.

use super::path::{rebuild_one, remove_one};
use super::{Row, Seat, Section};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kompletter Sitzplan (ein Snapshot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    /// Eindeutige ID, unveränderlich nach Erstellung
    pub id: String,
    /// Name des Plans (auch Export-Dateiname)
    pub name: String,
    /// Sektionen in Anzeige-/Z-Reihenfolge
    pub sections: Vec<Arc<Section>>,
}

impl MapData {
    /// Erstellt einen leeren Plan.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Sucht eine Sektion per ID.
    pub fn section(&self, section_id: &str) -> Option<&Arc<Section>> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Sucht eine Reihe innerhalb einer Sektion.
    pub fn row(&self, section_id: &str, row_id: &str) -> Option<&Arc<Row>> {
        self.section(section_id)?.row(row_id)
    }

    /// Sucht einen Sitz über den vollen Pfad.
    pub fn seat(&self, section_id: &str, row_id: &str, seat_id: &str) -> Option<&Arc<Seat>> {
        self.row(section_id, row_id)?.seat(seat_id)
    }

    /// Kopie mit neuem Namen.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: name.into(),
            sections: self.sections.clone(),
        }
    }

    /// Kopie mit angehängter Sektion.
    pub fn with_section_added(&self, section: Section) -> Self {
        let mut sections = Vec::with_capacity(self.sections.len() + 1);
        sections.extend(self.sections.iter().cloned());
        sections.push(Arc::new(section));
        self.with_sections(sections)
    }

    /// Ersetzt eine Sektion durch `f(section)`.
    pub fn with_section_updated(
        &self,
        section_id: &str,
        f: impl FnOnce(&Section) -> Section,
    ) -> Option<Self> {
        let sections = rebuild_one(&self.sections, section_id, |s| Some(f(s)))?;
        Some(self.with_sections(sections))
    }

    /// Entfernt eine Sektion samt Teilbaum und liefert sie mit zurück.
    pub fn with_section_removed(&self, section_id: &str) -> Option<(Self, Arc<Section>)> {
        let (sections, removed) = remove_one(&self.sections, section_id)?;
        Some((self.with_sections(sections), removed))
    }

    /// Hängt eine Reihe an eine Sektion an.
    pub fn with_row_added(&self, section_id: &str, row: Row) -> Option<Self> {
        self.with_section_updated(section_id, |s| s.with_row_added(row))
    }

    /// Ersetzt eine Reihe durch `f(row)`.
    pub fn with_row_updated(
        &self,
        section_id: &str,
        row_id: &str,
        f: impl FnOnce(&Row) -> Row,
    ) -> Option<Self> {
        let sections = rebuild_one(&self.sections, section_id, |s| {
            s.with_row_updated(row_id, |r| Some(f(r)))
        })?;
        Some(self.with_sections(sections))
    }

    /// Entfernt eine Reihe samt Sitzen und liefert sie mit zurück.
    pub fn with_row_removed(&self, section_id: &str, row_id: &str) -> Option<(Self, Arc<Row>)> {
        let mut removed = None;
        let sections = rebuild_one(&self.sections, section_id, |s| {
            let (section, row) = s.with_row_removed(row_id)?;
            removed = Some(row);
            Some(section)
        })?;
        Some((self.with_sections(sections), removed?))
    }

    /// Ersetzt einen Sitz durch `f(seat)`.
    pub fn with_seat_updated(
        &self,
        section_id: &str,
        row_id: &str,
        seat_id: &str,
        f: impl FnOnce(&Seat) -> Seat,
    ) -> Option<Self> {
        let sections = rebuild_one(&self.sections, section_id, |s| {
            s.with_row_updated(row_id, |r| r.with_seat_updated(seat_id, f))
        })?;
        Some(self.with_sections(sections))
    }

    /// Gesamtzahl der Sitze.
    pub fn seat_count(&self) -> usize {
        self.sections.iter().map(|s| s.seat_count()).sum()
    }

    /// Anzahl belegter Sitze.
    pub fn occupied_count(&self) -> usize {
        self.sections.iter().map(|s| s.occupied_count()).sum()
    }

    fn with_sections(&self, sections: Vec<Arc<Section>>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            sections,
        }
    }
}
