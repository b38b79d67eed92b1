//! ID-Vergabe für Map, Sektionen, Reihen und Sitze.
//!
//! Der Generator ist die einzige Quelle neuer IDs innerhalb einer Sitzung.
//! Welche Strategie dahinter steckt (UUID, Zähler) spielt für den Rest
//! des Editors keine Rolle, solange jede ID sitzungsweit eindeutig ist.

use uuid::Uuid;

/// Liefert sitzungsweit eindeutige Entity-IDs.
pub trait IdGenerator: Send {
    /// Erzeugt eine neue, bisher nicht vergebene ID.
    fn next_id(&mut self) -> String;
}

/// Standard-Generator: zufällige UUID v4 als Text.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministischer Zähler-Generator (`<prefix>-1`, `<prefix>-2`, ...).
///
/// Nur für Tests und Benchmarks. Der Zähler kennt keine importierten IDs:
/// nach dem Import eines Dokuments mit `<prefix>-N`-IDs kann er bereits
/// vergebene IDs erneut liefern. Hosts verwenden [`UuidIdGenerator`]
/// (Standard in `AppState::new`).
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Erstellt einen Zähler, der bei 1 beginnt.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
