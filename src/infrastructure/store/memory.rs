//! In-memory pasteboard store
//!
//! Full-fidelity store used by tests and headless environments: named
//! pasteboards and arbitrary type identifiers all work, so both the
//! text and the binary decode branches can be driven deterministically.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use crate::application::ports::{PasteboardStore, Representation, StoreError};
use crate::domain::PasteboardName;

/// Shared backing state: pasteboard name → type identifier → bytes.
pub type MemoryRegistry = Arc<Mutex<HashMap<String, BTreeMap<String, Vec<u8>>>>>;

/// In-memory pasteboard store
pub struct MemoryStore {
    registry: MemoryRegistry,
    pasteboard: String,
}

impl MemoryStore {
    /// Create an empty registry for a family of stores to share
    pub fn registry() -> MemoryRegistry {
        Arc::new(Mutex::new(HashMap::new()))
    }

    /// Open a store bound to one pasteboard in the given registry
    pub fn open(registry: &MemoryRegistry, pasteboard: &PasteboardName) -> Self {
        Self {
            registry: Arc::clone(registry),
            pasteboard: pasteboard.to_string(),
        }
    }

    fn with_item<R>(&self, f: impl FnOnce(&mut BTreeMap<String, Vec<u8>>) -> R) -> R {
        let mut registry = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(registry.entry(self.pasteboard.clone()).or_default())
    }
}

impl PasteboardStore for MemoryStore {
    fn type_identifiers(&mut self) -> Result<Vec<String>, StoreError> {
        Ok(self.with_item(|item| item.keys().cloned().collect()))
    }

    fn read_string(&mut self, type_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.with_item(|item| {
            item.get(type_id)
                .and_then(|data| String::from_utf8(data.clone()).ok())
        }))
    }

    fn read_data(&mut self, type_id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.with_item(|item| item.get(type_id).cloned()))
    }

    fn write(&mut self, representations: &[Representation]) -> Result<(), StoreError> {
        self.with_item(|item| {
            for rep in representations {
                item.insert(rep.type_id.clone(), rep.data.clone());
            }
        });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.with_item(BTreeMap::clear);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pasteboards_are_isolated() {
        let registry = MemoryStore::registry();
        let mut general = MemoryStore::open(&registry, &PasteboardName::General);
        let mut find = MemoryStore::open(&registry, &PasteboardName::Find);

        general
            .write(&[Representation::text("public.utf8-plain-text", "general")])
            .unwrap();
        assert!(find.type_identifiers().unwrap().is_empty());
        assert_eq!(general.type_identifiers().unwrap().len(), 1);
    }

    #[test]
    fn stores_on_the_same_pasteboard_share_state() {
        let registry = MemoryStore::registry();
        let name: PasteboardName = "com.example.scratch".parse().unwrap();
        let mut writer = MemoryStore::open(&registry, &name);
        let mut reader = MemoryStore::open(&registry, &name);

        writer
            .write(&[Representation::text("public.utf8-plain-text", "shared")])
            .unwrap();
        assert_eq!(
            reader.read_string("public.utf8-plain-text").unwrap(),
            Some("shared".to_string())
        );
    }

    #[test]
    fn read_string_rejects_non_utf8_payloads() {
        let registry = MemoryStore::registry();
        let mut store = MemoryStore::open(&registry, &PasteboardName::General);
        store
            .write(&[Representation::new("com.test.blob", vec![0xff, 0xfe])])
            .unwrap();

        assert_eq!(store.read_string("com.test.blob").unwrap(), None);
        assert_eq!(
            store.read_data("com.test.blob").unwrap(),
            Some(vec![0xff, 0xfe])
        );
    }

    #[test]
    fn clear_removes_everything() {
        let registry = MemoryStore::registry();
        let mut store = MemoryStore::open(&registry, &PasteboardName::General);
        store
            .write(&[
                Representation::text("public.utf8-plain-text", "a"),
                Representation::new("com.test.blob", vec![1, 2, 3]),
            ])
            .unwrap();

        store.clear().unwrap();
        assert!(store.type_identifiers().unwrap().is_empty());
    }
}
