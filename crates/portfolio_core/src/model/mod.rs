//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the item record shared by storage, rendering and mutation paths.
//! - Define the three fixed categories and their stable identifiers.
//! - Own the in-memory ordered sequence for each category.
//!
//! # Invariants
//! - Item identity is positional; there is no id field.
//! - No item is shared between two categories.

pub mod category;
pub mod item;
pub mod portfolio;
