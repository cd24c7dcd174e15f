//! "Add assessment" form glue.
//!
//! Unlike the mutation API, the form reports an empty title back to the
//! user instead of ignoring it.

use crate::model::item::ItemInput;
use crate::render::Surfaces;
use crate::repo::item_store::ItemStore;
use crate::service::portfolio_service::PortfolioService;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Confirmation shown after a successful submit.
pub const ASSESSMENT_ADDED_MESSAGE: &str = "Assessment added.";

/// User-facing form rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyTitle,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Please enter an assessment title."),
        }
    }
}

impl Error for FormError {}

/// Feedback for a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFeedback {
    pub message: &'static str,
    /// Whether the form inputs should be cleared.
    pub cleared: bool,
}

/// Submits the title/link inputs of the assessment form.
///
/// # Contract
/// - Empty trimmed title → `Err(FormError::EmptyTitle)`, nothing is added.
/// - Empty trimmed link is submitted as absent.
pub fn submit_assessment_form<S: ItemStore, D: Surfaces>(
    service: &mut PortfolioService<S, D>,
    title: &str,
    link: &str,
) -> Result<FormFeedback, FormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FormError::EmptyTitle);
    }

    let link = link.trim();
    let mut input = ItemInput::new(title);
    if !link.is_empty() {
        input = input.link(link);
    }
    service.add_assessment(input);

    Ok(FormFeedback {
        message: ASSESSMENT_ADDED_MESSAGE,
        cleared: true,
    })
}
