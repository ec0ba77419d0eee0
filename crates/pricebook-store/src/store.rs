use crate::backend::StorageBackend;
use crate::{Error, Result};
use pricebook_types::{Item, ItemId};

/// Key of the single namespace entry holding the serialized item array.
const ITEMS_KEY: &str = "items";

/// Durable mirror of the in-memory item collection.
///
/// Every mutation is a whole-array read-modify-write; after a completed
/// mutation the persisted array is structurally equal to the registry's
/// collection. Single-threaded by construction, so the read-modify-write
/// is never raced.
pub struct ItemStore {
    backend: Box<dyn StorageBackend>,
}

impl ItemStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Read the persisted array. Missing entry means an empty list;
    /// a present but malformed entry is a loud [`Error::Corrupt`].
    pub fn read_all(&self) -> Result<Vec<Item>> {
        match self.backend.get(ITEMS_KEY)? {
            None => Ok(Vec::new()),
            Some(content) => {
                serde_json::from_str(&content).map_err(|err| Error::Corrupt(err.to_string()))
            }
        }
    }

    /// Append one item to the persisted array.
    pub fn append(&mut self, item: &Item) -> Result<()> {
        let mut items = self.read_all()?;
        items.push(item.clone());
        self.write(&items)
    }

    /// Replace the first entry with a matching id, in place at its current
    /// position. Silently a no-op when no entry matches.
    pub fn replace(&mut self, updated: &Item) -> Result<()> {
        let mut items = self.read_all()?;
        if let Some(slot) = items.iter_mut().find(|item| item.id == updated.id) {
            *slot = updated.clone();
        }
        self.write(&items)
    }

    /// Remove every entry with a matching id.
    pub fn remove(&mut self, id: ItemId) -> Result<()> {
        let mut items = self.read_all()?;
        items.retain(|item| item.id != id);
        self.write(&items)
    }

    /// Delete the namespace entry entirely.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(ITEMS_KEY)
    }

    /// True when no entry exists at all (as opposed to an empty array).
    pub fn has_entry(&self) -> Result<bool> {
        Ok(self.backend.get(ITEMS_KEY)?.is_some())
    }

    fn write(&mut self, items: &[Item]) -> Result<()> {
        let content =
            serde_json::to_string(items).map_err(|err| Error::Corrupt(err.to_string()))?;
        self.backend.set(ITEMS_KEY, &content)
    }
}
