//! Portfolio use-case services.
//!
//! # Responsibility
//! - Validate and apply mutations against the category model.
//! - Keep persistence and rendering in lockstep with every applied mutation.
//! - Provide the assessment form glue on top of the mutation API.
//!
//! # See also
//! - crate::repo::item_store
//! - crate::render

pub mod assessment_form;
pub mod portfolio_service;
