//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry (title + optional link + optional image).
//! - Normalize caller input into that canonical shape.
//!
//! # Invariants
//! - `link` and `image` use `None` as the absent marker, never an empty string.
//! - Items produced by `normalize` carry a title without surrounding whitespace.

use serde::{Deserialize, Serialize};

/// One portfolio entry.
///
/// Identity is purely positional inside the owning category sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display title. Non-empty for items added through the service.
    pub title: String,
    /// Target opened in a new browsing context when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Image reference rendered before the title when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Creates an unlinked, image-less item.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            image: None,
        }
    }

    /// Sets the hyperlink target.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Structured input accepted by add operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub title: String,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl ItemInput {
    /// Creates input with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            image: None,
        }
    }

    /// Positional convenience form: `(title, link, image)`.
    pub fn positional(
        title: impl Into<String>,
        link: Option<impl Into<String>>,
        image: Option<impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.map(Into::into),
            image: image.map(Into::into),
        }
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl From<&str> for ItemInput {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for ItemInput {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

/// Produces the canonical item for `input`.
///
/// Only the title is trimmed. Provided link/image values are kept verbatim;
/// absent values stay `None`.
pub fn normalize(input: ItemInput) -> Item {
    Item {
        title: input.title.trim().to_string(),
        link: input.link,
        image: input.image,
    }
}
