//! Pfad-Rebuild für geschachtelte `Arc`-Listen.
//!
//! Ein Update baut nur das Ziel-Element neu; alle Geschwister werden per
//! Arc-Klon (O(1)) übernommen und bleiben damit referenzgleich.

use std::sync::Arc;

/// Entities mit sitzungsweit eindeutiger ID.
pub trait Identified {
    /// ID des Elements.
    fn id(&self) -> &str;
}

/// Ersetzt das erste Element mit passender ID durch `f(element)`.
///
/// Gibt `None` zurück, wenn die ID fehlt oder `f` selbst `None` liefert
/// (fehlendes Kind weiter unten im Pfad).
pub(crate) fn rebuild_one<T: Identified>(
    items: &[Arc<T>],
    id: &str,
    f: impl FnOnce(&T) -> Option<T>,
) -> Option<Vec<Arc<T>>> {
    let index = items.iter().position(|item| item.id() == id)?;
    let replacement = f(&items[index])?;

    let mut rebuilt = Vec::with_capacity(items.len());
    rebuilt.extend(items[..index].iter().cloned());
    rebuilt.push(Arc::new(replacement));
    rebuilt.extend(items[index + 1..].iter().cloned());
    Some(rebuilt)
}

/// Entfernt das erste Element mit passender ID und liefert es mit zurück.
pub(crate) fn remove_one<T: Identified>(
    items: &[Arc<T>],
    id: &str,
) -> Option<(Vec<Arc<T>>, Arc<T>)> {
    let index = items.iter().position(|item| item.id() == id)?;
    let mut remaining = items.to_vec();
    let removed = remaining.remove(index);
    Some((remaining, removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn items() -> Vec<Arc<Item>> {
        ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, id)| {
                Arc::new(Item {
                    id: id.to_string(),
                    value: i as u32,
                })
            })
            .collect()
    }

    #[test]
    fn rebuild_one_shares_siblings() {
        let before = items();
        let after = rebuild_one(&before, "b", |item| {
            Some(Item {
                id: item.id.clone(),
                value: 99,
            })
        })
        .expect("b vorhanden");

        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(!Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
        assert_eq!(after[1].value, 99);
        assert_eq!(before[1].value, 1);
    }

    #[test]
    fn rebuild_one_missing_id_is_none() {
        let before = items();
        assert!(rebuild_one(&before, "zzz", |_| None::<Item>).is_none());
    }

    #[test]
    fn remove_one_keeps_order() {
        let before = items();
        let (after, removed) = remove_one(&before, "a").expect("a vorhanden");
        assert_eq!(removed.id, "a");
        let ids: Vec<&str> = after.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
