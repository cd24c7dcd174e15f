//! Core domain logic for the portfolio.
//! This crate owns the item model, the durable item store, the renderer and
//! the mutation API that keeps the three in sync.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::Category;
pub use model::item::{normalize, Item, ItemInput};
pub use model::portfolio::Portfolio;
pub use render::{
    escape_title, render_all, render_catalogue, render_highlights, render_page, render_tile,
    PageSurfaces, Surfaces, EMPTY_CATALOGUE_MARKUP, HIGHLIGHT_COUNT,
};
pub use repo::item_store::{ItemStore, RepoError, RepoResult, SqliteItemStore};
pub use service::assessment_form::{submit_assessment_form, FormError, FormFeedback};
pub use service::portfolio_service::{IgnoreReason, MutationOutcome, PortfolioService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
