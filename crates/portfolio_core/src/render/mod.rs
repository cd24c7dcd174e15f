//! Markup projection of category sequences onto display surfaces.
//!
//! # Responsibility
//! - Slice each category into highlight (first three) and catalogue (rest).
//! - Project items to tile markup and replace surface content wholesale.
//! - Lay the six surfaces out as a standalone HTML page.
//!
//! # Invariants
//! - Rendering is deterministic: unchanged input yields byte-identical markup.
//! - A missing surface is a silent no-op for that surface only.

pub mod page;
pub mod surface;
pub mod tile;

pub use page::render_page;
pub use surface::{PageSurfaces, Surfaces};
pub use tile::{escape_title, render_tile};

use crate::model::category::Category;
use crate::model::item::Item;
use crate::model::portfolio::Portfolio;
use log::debug;

/// Number of items shown on a highlight surface.
pub const HIGHLIGHT_COUNT: usize = 3;

/// Placeholder rendered when a catalogue has nothing beyond the highlights.
pub const EMPTY_CATALOGUE_MARKUP: &str = r#"<li class="muted">No extra items.</li>"#;

/// Renders the first `HIGHLIGHT_COUNT` items onto `surface_id`.
pub fn render_highlights(items: &[Item], surface_id: &str, surfaces: &mut impl Surfaces) {
    if !surfaces.has_surface(surface_id) {
        return;
    }
    let end = items.len().min(HIGHLIGHT_COUNT);
    surfaces.replace(surface_id, render_tiles(&items[..end]));
}

/// Renders every item after the highlights onto `surface_id`.
pub fn render_catalogue(items: &[Item], surface_id: &str, surfaces: &mut impl Surfaces) {
    if !surfaces.has_surface(surface_id) {
        return;
    }
    let rest = items.get(HIGHLIGHT_COUNT..).unwrap_or_default();
    let markup = if rest.is_empty() {
        EMPTY_CATALOGUE_MARKUP.to_string()
    } else {
        render_tiles(rest)
    };
    surfaces.replace(surface_id, markup);
}

/// Redraws all six surfaces from `portfolio`.
pub fn render_all(portfolio: &Portfolio, surfaces: &mut impl Surfaces) {
    for category in Category::ALL {
        let items = portfolio.items(category);
        render_highlights(items, category.highlight_surface(), surfaces);
        render_catalogue(items, category.catalogue_surface(), surfaces);
    }
    debug!("event=render_all module=render status=ok");
}

fn render_tiles(items: &[Item]) -> String {
    items.iter().map(render_tile).collect()
}
