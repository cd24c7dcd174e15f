//! Portfolio categories and their stable identifiers.

use crate::model::item::Item;

/// Persistence key for achievements.
pub const ACHIEVEMENTS_KEY: &str = "portfolio.achievements.v1";
/// Persistence key for projects.
pub const PROJECTS_KEY: &str = "portfolio.projects.v1";
/// Persistence key for assessments.
pub const ASSESSMENTS_KEY: &str = "portfolio.assessments.v1";

const EASY_E_LINK: &str = "https://github.com/easy-e/event-management-system";

/// One of the three fixed item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Achievements,
    Projects,
    Assessments,
}

impl Category {
    /// All categories in render and persistence order.
    pub const ALL: [Category; 3] = [
        Category::Achievements,
        Category::Projects,
        Category::Assessments,
    ];

    /// Stable lowercase name used by external callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Achievements => "achievements",
            Self::Projects => "projects",
            Self::Assessments => "assessments",
        }
    }

    /// Parses a category name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "achievements" => Some(Self::Achievements),
            "projects" => Some(Self::Projects),
            "assessments" => Some(Self::Assessments),
            _ => None,
        }
    }

    /// Versioned key addressing this category in the item store.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Achievements => ACHIEVEMENTS_KEY,
            Self::Projects => PROJECTS_KEY,
            Self::Assessments => ASSESSMENTS_KEY,
        }
    }

    /// Surface id showing the first items of this category.
    pub fn highlight_surface(self) -> &'static str {
        match self {
            Self::Achievements => "portfolio-achievements",
            Self::Projects => "portfolio-projects",
            Self::Assessments => "portfolio-assessments",
        }
    }

    /// Surface id showing the overflow items of this category.
    pub fn catalogue_surface(self) -> &'static str {
        match self {
            Self::Achievements => "catalogue-achievements",
            Self::Projects => "catalogue-projects",
            Self::Assessments => "catalogue-assessments",
        }
    }

    /// Section heading used by the full page layout.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Achievements => "Achievements",
            Self::Projects => "Projects",
            Self::Assessments => "Assessments",
        }
    }

    /// Built-in seed sequence. Returns a fresh vector on every call.
    pub fn defaults(self) -> Vec<Item> {
        match self {
            Self::Achievements => vec![
                Item::new("Achievement 1"),
                Item::new("Achievement 2"),
                Item::new("Achievement 3"),
            ],
            Self::Projects => vec![
                Item::new("Easy-E (Event Management System)").with_link(EASY_E_LINK),
                Item::new("Project 2"),
                Item::new("Project 3"),
                Item::new("Project 4"),
            ],
            Self::Assessments => vec![
                Item::new("Assessment 1"),
                Item::new("Assessment 2"),
                Item::new("Assessment 3"),
            ],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
