//! Stapel-Erzeugung von Reihen mit fortlaufend benannten Sitzen.
//!
//! Beschriftung:
//! - Reihe: `"<label> <n>"` bei mehr als einer Reihe, sonst `<label>`
//! - Sitz: `"<prefix><i>"` mit Präfix, sonst `"<reihenlabel><i>"`
//!
//! Indizes sind 1-basiert, Sitze liegen auf `y = 0` im Abstand `seat_spacing`.

use super::{IdGenerator, Row, Seat};
use crate::shared::EditorOptions;

/// Eingaben des "Reihen anlegen"-Dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBatch {
    /// Basis-Label der Reihen
    pub label: String,
    /// Anzahl Reihen
    pub row_count: u32,
    /// Sitze pro Reihe
    pub seat_count: u32,
    /// Optionales Sitz-Präfix (leer = Reihenlabel verwenden)
    pub seat_prefix: Option<String>,
}

/// Ungültige Dialog-Eingabe.
///
/// Wird nur vom Dialog-Layer geprüft; die Mutationen selbst validieren nicht.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name der Reihe darf nicht leer sein")]
    EmptyLabel,
    #[error("Anzahl Reihen muss zwischen 1 und {max} liegen (war {value})")]
    RowCountOutOfRange { value: u32, max: u32 },
    #[error("Anzahl Sitze muss zwischen 1 und {max} liegen (war {value})")]
    SeatCountOutOfRange { value: u32, max: u32 },
}

impl RowBatch {
    /// Batch ohne Sitz-Präfix.
    pub fn new(label: impl Into<String>, row_count: u32, seat_count: u32) -> Self {
        Self {
            label: label.into(),
            row_count,
            seat_count,
            seat_prefix: None,
        }
    }

    /// Setzt das Sitz-Präfix.
    pub fn with_seat_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.seat_prefix = Some(prefix.into());
        self
    }

    /// Prüft die Dialog-Grenzen (Label, Reihen 1..=max, Sitze 1..=max).
    pub fn validate(&self, options: &EditorOptions) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if !(1..=options.max_rows_per_batch).contains(&self.row_count) {
            return Err(ValidationError::RowCountOutOfRange {
                value: self.row_count,
                max: options.max_rows_per_batch,
            });
        }
        if !(1..=options.max_seats_per_row).contains(&self.seat_count) {
            return Err(ValidationError::SeatCountOutOfRange {
                value: self.seat_count,
                max: options.max_seats_per_row,
            });
        }
        Ok(())
    }

    /// Label der `n`-ten Reihe (1-basiert).
    pub fn row_label(&self, n: u32) -> String {
        let base = self.label.trim();
        if self.row_count > 1 {
            format!("{base} {n}")
        } else {
            base.to_string()
        }
    }

    /// Label des `i`-ten Sitzes (1-basiert) einer Reihe.
    pub fn seat_label(&self, row_label: &str, i: u32) -> String {
        match self.prefix() {
            Some(prefix) => format!("{prefix}{i}"),
            None => format!("{row_label}{i}"),
        }
    }

    /// Baut alle Reihen mit frisch vergebenen IDs (Reihen-ID vor den Sitz-IDs).
    pub fn build_rows(&self, ids: &mut dyn IdGenerator, seat_spacing: f64) -> Vec<Row> {
        (1..=self.row_count)
            .map(|n| {
                let row_id = ids.next_id();
                let label = self.row_label(n);
                let seats = (1..=self.seat_count)
                    .map(|i| {
                        Seat::new(
                            ids.next_id(),
                            self.seat_label(&label, i),
                            f64::from(i - 1) * seat_spacing,
                            0.0,
                        )
                    })
                    .collect();
                Row::new(row_id, label, seats)
            })
            .collect()
    }

    fn prefix(&self) -> Option<&str> {
        self.seat_prefix
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
