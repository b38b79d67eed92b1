//! Sektion: positionierte, drehbare, farbige Gruppe von Reihen.

use super::path::{rebuild_one, remove_one, Identified};
use super::Row;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Schrittweite der diskreten Rotation (Rotate-Button).
pub const ROTATION_STEP_DEG: f64 = 90.0;

/// Normalisiert einen Winkel in Grad auf `[0, 360)`.
pub fn normalize_rotation(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid kann bei winzigen negativen Werten exakt 360.0 liefern
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sektion des Sitzplans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub label: String,
    /// Farbe (opakes Token, z.B. `#3b82f6`)
    pub color: String,
    /// Reihen in Anzeige-Reihenfolge
    pub rows: Vec<Arc<Row>>,
    /// Position im Modell-Raum (frei, ohne Canvas-Grenzen)
    #[serde(with = "super::serde_point")]
    pub position: DVec2,
    /// Rotation in Grad, `[0, 360)`
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Krümmung in Prozent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<f64>,
}

impl Section {
    /// Erstellt eine leere Sektion ohne Rotation.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        position: DVec2,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            rows: Vec::new(),
            position,
            rotation: 0.0,
            width: None,
            height: None,
            curve: None,
        }
    }

    /// Sucht eine Reihe per ID.
    pub fn row(&self, row_id: &str) -> Option<&Arc<Row>> {
        self.rows.iter().find(|row| row.id == row_id)
    }

    /// Kopie mit übernommenen Patch-Feldern. Rotation wird mod 360 genommen.
    pub fn merged(&self, patch: &SectionPatch) -> Self {
        Self {
            id: self.id.clone(),
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
            rows: self.rows.clone(),
            position: patch.position.unwrap_or(self.position),
            rotation: patch
                .rotation
                .map(normalize_rotation)
                .unwrap_or(self.rotation),
            width: patch.width.or(self.width),
            height: patch.height.or(self.height),
            curve: patch.curve.or(self.curve),
        }
    }

    /// Kopie um 90 Grad weitergedreht.
    pub fn rotated_step(&self) -> Self {
        Self {
            rotation: normalize_rotation(self.rotation + ROTATION_STEP_DEG),
            ..self.clone()
        }
    }

    /// Kopie mit angehängter Reihe.
    pub fn with_row_added(&self, row: Row) -> Self {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend(self.rows.iter().cloned());
        rows.push(Arc::new(row));
        Self {
            rows,
            ..self.clone_shallow()
        }
    }

    /// Baut die Sektion mit ersetzter Reihe neu; `None` wenn die Reihe
    /// (oder ein Kind, das `f` sucht) fehlt.
    pub fn with_row_updated(
        &self,
        row_id: &str,
        f: impl FnOnce(&Row) -> Option<Row>,
    ) -> Option<Self> {
        let rows = rebuild_one(&self.rows, row_id, f)?;
        Some(Self {
            rows,
            ..self.clone_shallow()
        })
    }

    /// Entfernt eine Reihe samt Sitzen und liefert sie mit zurück.
    pub fn with_row_removed(&self, row_id: &str) -> Option<(Self, Arc<Row>)> {
        let (rows, removed) = remove_one(&self.rows, row_id)?;
        Some((
            Self {
                rows,
                ..self.clone_shallow()
            },
            removed,
        ))
    }

    /// Gesamtzahl der Sitze über alle Reihen.
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|row| row.seats.len()).sum()
    }

    /// Anzahl belegter Sitze über alle Reihen.
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().map(|row| row.occupied_count()).sum()
    }

    /// Klon ohne Reihen (die Reihenliste setzt der Aufrufer neu).
    fn clone_shallow(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            color: self.color.clone(),
            rows: Vec::new(),
            position: self.position,
            rotation: self.rotation,
            width: self.width,
            height: self.height,
            curve: self.curve,
        }
    }
}

impl Identified for Section {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Teil-Update für eine Sektion; `None` = Feld unverändert lassen.
///
/// `rotation` ist der kontinuierliche Pfad (Slider), unabhängig vom
/// 90-Grad-Schritt aus [`Section::rotated_step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPatch {
    pub label: Option<String>,
    pub color: Option<String>,
    pub position: Option<DVec2>,
    pub rotation: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub curve: Option<f64>,
}

impl SectionPatch {
    /// Patch, der nur die Position setzt (Drag).
    pub fn position(position: DVec2) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
}
