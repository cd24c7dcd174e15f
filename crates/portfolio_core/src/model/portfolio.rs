//! In-memory category model.
//!
//! # Responsibility
//! - Own one ordered item sequence per category.
//! - Round-trip all sequences with an `ItemStore`.
//!
//! # Invariants
//! - Order is insertion order: loaded items first, appended items after.
//! - `persist_all` writes every category, never a subset.

use crate::model::category::Category;
use crate::model::item::Item;
use crate::repo::item_store::ItemStore;

/// The three category sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    achievements: Vec<Item>,
    projects: Vec<Item>,
    assessments: Vec<Item>,
}

impl Portfolio {
    /// Portfolio seeded from built-in defaults, without touching any store.
    pub fn with_defaults() -> Self {
        let mut portfolio = Self::default();
        for category in Category::ALL {
            *portfolio.items_mut(category) = category.defaults();
        }
        portfolio
    }

    /// Loads every category from `store`, falling back to built-in defaults.
    pub fn load_all(store: &impl ItemStore) -> Self {
        let mut portfolio = Self::default();
        for category in Category::ALL {
            let defaults = category.defaults();
            *portfolio.items_mut(category) = store.load(category.storage_key(), &defaults);
        }
        portfolio
    }

    /// Writes every category to `store`.
    pub fn persist_all(&self, store: &impl ItemStore) {
        for category in Category::ALL {
            store.save(category.storage_key(), self.items(category));
        }
    }

    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Achievements => &self.achievements,
            Category::Projects => &self.projects,
            Category::Assessments => &self.assessments,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.items(category).len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.items(category).is_empty()
    }

    /// Appends `item` and returns its index.
    pub fn push(&mut self, category: Category, item: Item) -> usize {
        let items = self.items_mut(category);
        items.push(item);
        items.len() - 1
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// Returns `None` and leaves the sequence untouched when out of bounds.
    pub fn remove(&mut self, category: Category, index: usize) -> Option<Item> {
        let items = self.items_mut(category);
        if index >= items.len() {
            return None;
        }
        Some(items.remove(index))
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Achievements => &mut self.achievements,
            Category::Projects => &mut self.projects,
            Category::Assessments => &mut self.assessments,
        }
    }
}
