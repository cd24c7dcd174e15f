//! Display surface abstraction.

use crate::model::category::Category;
use std::collections::BTreeMap;

/// Named containers that rendered markup is written into.
///
/// Surfaces are owned by the page layout; the renderer only replaces their
/// content and tolerates any of them being absent.
pub trait Surfaces {
    fn has_surface(&self, id: &str) -> bool;
    /// Replaces the full content of `id`. Unknown ids are ignored.
    fn replace(&mut self, id: &str, markup: String);
    fn content(&self, id: &str) -> Option<&str>;
}

/// In-memory surface set with a fixed list of declared ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSurfaces {
    contents: BTreeMap<String, String>,
}

impl PageSurfaces {
    /// Declares all six standard surfaces, each initially empty.
    pub fn standard() -> Self {
        Self::with_ids(
            Category::ALL
                .into_iter()
                .flat_map(|category| [category.highlight_surface(), category.catalogue_surface()]),
        )
    }

    /// Declares exactly `ids`, each initially empty.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contents: ids
                .into_iter()
                .map(|id| (id.into(), String::new()))
                .collect(),
        }
    }

    /// Declared ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.contents.keys().map(String::as_str)
    }
}

impl Surfaces for PageSurfaces {
    fn has_surface(&self, id: &str) -> bool {
        self.contents.contains_key(id)
    }

    fn replace(&mut self, id: &str, markup: String) {
        if let Some(content) = self.contents.get_mut(id) {
            *content = markup;
        }
    }

    fn content(&self, id: &str) -> Option<&str> {
        self.contents.get(id).map(String::as_str)
    }
}
