use crate::{Error, Result};
use pricebook_types::{Item, ItemId, parse_price};

/// Authoritative in-memory item collection plus the current edit selection.
///
/// The registry is seeded from the persistence mirror once at startup and
/// is the source of truth afterwards; the coordinator mirrors every
/// mutation back out. Items stay in insertion order.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    current_id: Option<ItemId>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection from persisted state. Replaces anything held so
    /// far and clears the selection.
    pub fn seed(&mut self, items: Vec<Item>) {
        self.items = items;
        self.current_id = None;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse and validate the raw price, assign the next id, and append.
    /// Fails before any mutation when the price is not numeric.
    pub fn add(&mut self, name: &str, raw_price: &str) -> Result<Item> {
        let price = parse_price(raw_price)?;
        let item = Item::new(self.next_id(), name.trim(), price);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Next id is max(existing ids) + 1, or 0 for an empty collection.
    /// Max-based rather than last-position-based, so the invariant holds
    /// even if the collection is ever ordered by something other than id.
    fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutate the currently selected item's name and price in place. The
    /// id is immutable. Fails loudly when nothing is selected.
    pub fn update(&mut self, name: &str, raw_price: &str) -> Result<Item> {
        let price = parse_price(raw_price)?;
        let id = self.current_id.ok_or(Error::MissingSelection)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(Error::UnknownItem(id))?;
        item.name = name.trim().to_string();
        item.price = price;
        Ok(item.clone())
    }

    /// Remove the first entry matching `id`. Clears the selection when the
    /// selected item is the one removed, so no dangling reference survives.
    pub fn remove(&mut self, id: ItemId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.items.remove(index);
        }
        if self.current_id == Some(id) {
            self.current_id = None;
        }
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        self.current_id = None;
    }

    /// Select the item to edit. Fails when the id does not exist, so the
    /// selection can never point outside the collection.
    pub fn set_current(&mut self, id: ItemId) -> Result<&Item> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or(Error::UnknownItem(id))?;
        self.current_id = Some(item.id);
        Ok(item)
    }

    pub fn clear_current(&mut self) {
        self.current_id = None;
    }

    pub fn current(&self) -> Option<&Item> {
        self.current_id.and_then(|id| self.find(id))
    }

    /// Sum of all prices, recomputed on demand.
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }
}
