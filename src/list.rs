//! List Reconciler
//!
//! Ordered item collection with stable ids. Ids come from a counter that
//! only moves forward, so removing an item never frees its id for reuse.

use std::fmt;

use crate::error::ListError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem<T> {
    pub id: ItemId,
    pub value: T,
}

/// Insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCollection<T> {
    items: Vec<ListItem<T>>,
    next_id: u64,
}

impl<T> ItemCollection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 0 }
    }

    /// Build a collection from fetched records, ids assigned in order
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::new();
        for value in values {
            collection.append(value);
        }
        collection
    }

    pub fn append(&mut self, value: T) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(ListItem { id, value });
        id
    }

    pub fn remove(&mut self, id: ItemId) -> Result<ListItem<T>, ListError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ListError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn get(&self, id: ItemId) -> Option<&ListItem<T>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ListItem<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every item; the id counter keeps going.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> ItemCollection<T> {
    /// Snapshot for `<For>`, keyed by `ItemId`
    pub fn render(&self) -> Vec<ListItem<T>> {
        self.items.clone()
    }
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
