//! Sitzreihe: geordnete Sitze, Reihenfolge = Anzeige von links nach rechts.

use super::path::{rebuild_one, Identified};
use super::Seat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reihe innerhalb einer Sektion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename der Reihe
    pub label: String,
    /// Sitze in Anzeige-Reihenfolge (Arc für Structural Sharing)
    pub seats: Vec<Arc<Seat>>,
}

impl Row {
    /// Erstellt eine Reihe aus fertigen Sitzen.
    pub fn new(id: impl Into<String>, label: impl Into<String>, seats: Vec<Seat>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            seats: seats.into_iter().map(Arc::new).collect(),
        }
    }

    /// Sucht einen Sitz per ID.
    pub fn seat(&self, seat_id: &str) -> Option<&Arc<Seat>> {
        self.seats.iter().find(|seat| seat.id == seat_id)
    }

    /// Kopie mit übernommenen Patch-Feldern.
    pub fn merged(&self, patch: &RowPatch) -> Self {
        Self {
            id: self.id.clone(),
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            seats: patch.seats.clone().unwrap_or_else(|| self.seats.clone()),
        }
    }

    /// Baut die Reihe mit einem ersetzten Sitz neu; `None` wenn der Sitz fehlt.
    pub fn with_seat_updated(&self, seat_id: &str, f: impl FnOnce(&Seat) -> Seat) -> Option<Self> {
        let seats = rebuild_one(&self.seats, seat_id, |seat| Some(f(seat)))?;
        Some(Self {
            id: self.id.clone(),
            label: self.label.clone(),
            seats,
        })
    }

    /// Anzahl belegter Sitze.
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.occupied).count()
    }
}

impl Identified for Row {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Teil-Update für eine Reihe; `None` = Feld unverändert lassen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowPatch {
    pub label: Option<String>,
    /// Ersetzt die komplette Sitzliste
    pub seats: Option<Vec<Arc<Seat>>>,
}
