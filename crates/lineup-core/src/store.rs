//! Session-scoped selection storage.
//!
//! The engine only reads through [`SessionStore`]; writes happen through
//! [`crate::LineupSession`] after validation.

use std::collections::BTreeMap;

use lineup_model::SlotKey;

/// Key-value store of slot selections living for one interactive session.
pub trait SessionStore {
    /// Player name currently held by `key`.
    fn get(&self, key: &SlotKey) -> Option<&str>;

    /// Stores `player` in `key`, returning the previous occupant.
    fn set(&mut self, key: SlotKey, player: String) -> Option<String>;

    /// Empties `key`, returning the previous occupant.
    fn remove(&mut self, key: &SlotKey) -> Option<String>;

    /// Every stored key, including keys outside the active formation.
    fn keys(&self) -> Vec<SlotKey>;

    /// Selections whose key does not satisfy `active`. They stay stored and
    /// come back when a formation containing the key is chosen again.
    fn orphaned(&self, active: &dyn Fn(&SlotKey) -> bool) -> Vec<(SlotKey, String)> {
        self.keys()
            .into_iter()
            .filter(|key| !active(key))
            .filter_map(|key| self.get(&key).map(|player| (key, player.to_string())))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySessionStore {
    selections: BTreeMap<SlotKey, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &SlotKey) -> Option<&str> {
        self.selections.get(key).map(String::as_str)
    }

    fn set(&mut self, key: SlotKey, player: String) -> Option<String> {
        self.selections.insert(key, player)
    }

    fn remove(&mut self, key: &SlotKey) -> Option<String> {
        self.selections.remove(key)
    }

    fn keys(&self) -> Vec<SlotKey> {
        self.selections.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_model::Position;

    #[test]
    fn set_replaces_previous_selection() {
        let mut store = MemorySessionStore::new();
        let key = SlotKey::new(Position::Defense, 1);
        assert_eq!(store.set(key, "A".to_string()), None);
        assert_eq!(store.set(key, "B".to_string()), Some("A".to_string()));
        assert_eq!(store.get(&key), Some("B"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn orphaned_lists_entries_without_removing_them() {
        let mut store = MemorySessionStore::new();
        store.set(SlotKey::new(Position::Defense, 5), "Five".to_string());
        store.set(SlotKey::new(Position::Defense, 1), "One".to_string());
        let orphaned = store.orphaned(&|key: &SlotKey| key.index <= 4);
        assert_eq!(
            orphaned,
            vec![(SlotKey::new(Position::Defense, 5), "Five".to_string())]
        );
        assert_eq!(store.len(), 2);
    }
}
