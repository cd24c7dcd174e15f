//! Persistence layer for category sequences.
//!
//! # Responsibility
//! - Define the best-effort item store contract used by the category model.
//! - Isolate SQLite and JSON encoding details from service orchestration.
//!
//! # Invariants
//! - `ItemStore` methods never return errors; failures stop at this boundary.
//! - Fallible raw accessors stay available on concrete backends for diagnostics.

pub mod item_store;
