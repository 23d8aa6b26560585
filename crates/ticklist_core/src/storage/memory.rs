//! In-memory storage fake for tests and ephemeral sessions.

use super::{StorageResult, TodoStorage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// HashMap-backed slot storage.
///
/// Clones share the underlying map, so constructing a second service over a
/// clone of the same `MemoryStorage` simulates a session reload against the
/// previously persisted state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("nothing").unwrap(), None);
    }

    #[test]
    fn write_then_read_roundtrip() {
        let storage = MemoryStorage::new();
        storage.write("k", "v1").unwrap();
        storage.write("k", "v2").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn clones_share_the_map() {
        let storage = MemoryStorage::new();
        let alias = storage.clone();
        storage.write("k", "shared").unwrap();
        assert_eq!(alias.read("k").unwrap().as_deref(), Some("shared"));
    }
}
