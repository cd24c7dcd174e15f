//! Single-item tile markup.

use crate::model::item::Item;

/// Escapes angle brackets in a title.
///
/// Quotes and ampersands pass through unchanged.
pub fn escape_title(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Projects one item to a `<li class="tile">` fragment.
///
/// Layout: optional image (alt = escaped title), then the title as a heading,
/// wrapped in a new-context link when the item has one.
///
/// Link and image values are trusted input: they are written into `href`
/// and `src` unescaped, so a `"` inside them ends the attribute.
pub fn render_tile(item: &Item) -> String {
    let title = escape_title(&item.title);
    let mut markup = String::from(r#"<li class="tile">"#);

    if let Some(image) = &item.image {
        markup.push_str(&format!(r#"<img src="{image}" alt="{title}">"#));
    }

    match &item.link {
        Some(link) => markup.push_str(&format!(
            r#"<h3><a href="{link}" target="_blank" rel="noopener noreferrer">{title}</a></h3>"#
        )),
        None => markup.push_str(&format!("<h3>{title}</h3>")),
    }

    markup.push_str("</li>");
    markup
}
