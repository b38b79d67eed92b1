//! Einzelner Sitz innerhalb einer Reihe.

use super::path::Identified;
use serde::{Deserialize, Serialize};

/// Kleinste Einheit des Sitzplans: Position relativ zur Reihe + Belegung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename (nicht eindeutig)
    pub label: String,
    /// X-Offset innerhalb der Reihe (Modell-Koordinaten)
    pub x: f64,
    /// Y-Offset innerhalb der Reihe (Modell-Koordinaten)
    pub y: f64,
    /// Belegt (true) oder frei (false)
    pub occupied: bool,
}

impl Seat {
    /// Erstellt einen freien Sitz.
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
            occupied: false,
        }
    }

    /// Kopie mit übernommenen Patch-Feldern.
    pub fn merged(&self, patch: &SeatPatch) -> Self {
        Self {
            id: self.id.clone(),
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            occupied: patch.occupied.unwrap_or(self.occupied),
        }
    }

    /// Kopie mit invertierter Belegung.
    pub fn toggled(&self) -> Self {
        Self {
            occupied: !self.occupied,
            ..self.clone()
        }
    }
}

impl Identified for Seat {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Teil-Update für einen Sitz; `None` = Feld unverändert lassen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatPatch {
    pub label: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub occupied: Option<bool>,
}
