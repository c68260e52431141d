use crate::types::{ItemId, ItemKind, PlacedItem};

/// Placed items in placement order. Later items draw on top.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<PlacedItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn push(&mut self, item: PlacedItem) {
        self.items.push(item);
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Topmost item covering the cell
    pub fn item_at(&self, x: i32, y: i32) -> Option<&PlacedItem> {
        self.items.iter().rev().find(|item| item.rect().contains(x, y))
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&PlacedItem) -> bool,
    {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the contents with a deep copy of `items`
    pub fn restore(&mut self, items: &[PlacedItem]) {
        self.items.clear();
        self.items.extend_from_slice(items);
    }

    pub fn iter_kind(&self, kind: ItemKind) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    pub fn iter_kind_mut(&mut self, kind: ItemKind) -> impl Iterator<Item = &mut PlacedItem> {
        self.items.iter_mut().filter(move |item| item.kind == kind)
    }
}

impl std::ops::Index<usize> for ItemStore {
    type Output = PlacedItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
