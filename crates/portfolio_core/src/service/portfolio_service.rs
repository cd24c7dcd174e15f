//! Portfolio mutation service.
//!
//! # Responsibility
//! - Own the category model, the item store handle and the display surfaces.
//! - Expose add/remove entry points for every category.
//!
//! # Invariants
//! - An applied mutation is always followed by `persist_all` and then a full
//!   re-render, before the call returns.
//! - A rejected mutation touches neither the store nor the surfaces.
//! - Rejections are reported through `MutationOutcome`, never as errors.

use crate::model::category::Category;
use crate::model::item::{normalize, Item, ItemInput};
use crate::model::portfolio::Portfolio;
use crate::render::{render_all, Surfaces};
use crate::repo::item_store::ItemStore;
use log::{debug, info};
use std::fmt::{Display, Formatter};

/// Why a mutation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Title was empty after trimming.
    EmptyTitle,
    /// Category name did not match any known category.
    UnknownCategory,
    /// Index was outside `[0, len)`.
    IndexOutOfRange,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::UnknownCategory => "unknown_category",
            Self::IndexOutOfRange => "index_out_of_range",
        }
    }
}

/// Result of one mutation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Added { category: Category, index: usize },
    Removed { category: Category, item: Item },
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    /// Whether the mutation changed state (and was persisted and rendered).
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

impl Display for MutationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added { category, index } => write!(f, "added {category}[{index}]"),
            Self::Removed { category, item } => {
                write!(f, "removed `{}` from {category}", item.title)
            }
            Self::Ignored(reason) => write!(f, "ignored: {}", reason.as_str()),
        }
    }
}

/// Explicitly constructed owner of all portfolio state.
pub struct PortfolioService<S: ItemStore, D: Surfaces> {
    portfolio: Portfolio,
    store: S,
    surfaces: D,
}

impl<S: ItemStore, D: Surfaces> PortfolioService<S, D> {
    /// Loads every category from `store` and draws all surfaces once.
    pub fn start(store: S, surfaces: D) -> Self {
        let portfolio = Portfolio::load_all(&store);
        let mut service = Self {
            portfolio,
            store,
            surfaces,
        };
        service.render_all();
        info!(
            "event=portfolio_start module=service status=ok achievements={} projects={} assessments={}",
            service.portfolio.len(Category::Achievements),
            service.portfolio.len(Category::Projects),
            service.portfolio.len(Category::Assessments)
        );
        service
    }

    /// Appends a normalized item to `category`.
    ///
    /// # Contract
    /// - Empty title after trimming → `Ignored(EmptyTitle)`, no side effects.
    /// - Otherwise append, persist all categories, re-render all surfaces.
    pub fn add(&mut self, category: Category, input: impl Into<ItemInput>) -> MutationOutcome {
        let item = normalize(input.into());
        if item.title.is_empty() {
            debug!("event=item_add module=service status=ignored category={category} reason=empty_title");
            return MutationOutcome::Ignored(IgnoreReason::EmptyTitle);
        }

        let index = self.portfolio.push(category, item);
        self.commit();
        info!("event=item_add module=service status=ok category={category} index={index}");
        MutationOutcome::Added { category, index }
    }

    pub fn add_achievement(&mut self, input: impl Into<ItemInput>) -> MutationOutcome {
        self.add(Category::Achievements, input)
    }

    pub fn add_project(&mut self, input: impl Into<ItemInput>) -> MutationOutcome {
        self.add(Category::Projects, input)
    }

    pub fn add_assessment(&mut self, input: impl Into<ItemInput>) -> MutationOutcome {
        self.add(Category::Assessments, input)
    }

    /// Positional form of `add_achievement`.
    pub fn add_achievement_positional(
        &mut self,
        title: &str,
        link: Option<&str>,
        image: Option<&str>,
    ) -> MutationOutcome {
        self.add_achievement(ItemInput::positional(title, link, image))
    }

    /// Positional form of `add_project`.
    pub fn add_project_positional(
        &mut self,
        title: &str,
        link: Option<&str>,
        image: Option<&str>,
    ) -> MutationOutcome {
        self.add_project(ItemInput::positional(title, link, image))
    }

    /// Positional form of `add_assessment`.
    pub fn add_assessment_positional(
        &mut self,
        title: &str,
        link: Option<&str>,
        image: Option<&str>,
    ) -> MutationOutcome {
        self.add_assessment(ItemInput::positional(title, link, image))
    }

    /// Removes the item at `index` from `category`.
    ///
    /// Later items shift down by one; previously observed indices beyond
    /// `index` must be recomputed by the caller.
    pub fn remove(&mut self, category: Category, index: usize) -> MutationOutcome {
        let Some(item) = self.portfolio.remove(category, index) else {
            debug!(
                "event=item_remove module=service status=ignored category={category} index={index} reason=index_out_of_range"
            );
            return MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange);
        };

        self.commit();
        info!("event=item_remove module=service status=ok category={category} index={index}");
        MutationOutcome::Removed { category, item }
    }

    /// String-keyed remove for external callers.
    pub fn remove_by_name(&mut self, category: &str, index: usize) -> MutationOutcome {
        match Category::parse(category) {
            Some(category) => self.remove(category, index),
            None => {
                debug!("event=item_remove module=service status=ignored reason=unknown_category");
                MutationOutcome::Ignored(IgnoreReason::UnknownCategory)
            }
        }
    }

    /// Writes every category to the store.
    pub fn persist_all(&self) {
        self.portfolio.persist_all(&self.store);
    }

    /// Redraws all six surfaces from the current model.
    pub fn render_all(&mut self) {
        render_all(&self.portfolio, &mut self.surfaces);
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn surfaces(&self) -> &D {
        &self.surfaces
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service, returning the store and surfaces.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.surfaces)
    }

    fn commit(&mut self) {
        self.persist_all();
        self.render_all();
    }
}

#[cfg(test)]
mod tests {
    use super::{IgnoreReason, MutationOutcome};
    use crate::model::category::Category;
    use crate::model::item::Item;

    #[test]
    fn only_ignored_outcomes_are_not_applied() {
        assert!(MutationOutcome::Added {
            category: Category::Projects,
            index: 0
        }
        .is_applied());
        assert!(MutationOutcome::Removed {
            category: Category::Projects,
            item: Item::new("x")
        }
        .is_applied());
        assert!(!MutationOutcome::Ignored(IgnoreReason::EmptyTitle).is_applied());
    }

    #[test]
    fn outcome_display_is_stable() {
        assert_eq!(
            MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange).to_string(),
            "ignored: index_out_of_range"
        );
        assert_eq!(
            MutationOutcome::Added {
                category: Category::Assessments,
                index: 3
            }
            .to_string(),
            "added assessments[3]"
        );
    }
}
