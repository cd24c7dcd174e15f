//! Standalone page layout around the six display surfaces.

use crate::model::category::Category;
use crate::render::surface::Surfaces;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Portfolio</title>
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Lays the current surface contents out as a complete HTML document.
///
/// Each category gets one `<section>`; undeclared surfaces are omitted.
pub fn render_page(surfaces: &impl Surfaces) -> String {
    let mut page = String::from(PAGE_HEAD);

    for category in Category::ALL {
        page.push_str(&format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n",
            category.as_str(),
            category.heading()
        ));
        push_list(&mut page, surfaces, category.highlight_surface(), "highlights");
        push_list(&mut page, surfaces, category.catalogue_surface(), "catalogue");
        page.push_str("</section>\n");
    }

    page.push_str(PAGE_TAIL);
    page
}

fn push_list(page: &mut String, surfaces: &impl Surfaces, id: &str, class: &str) {
    if let Some(content) = surfaces.content(id) {
        page.push_str(&format!(
            "<ul id=\"{id}\" class=\"{class}\">{content}</ul>\n"
        ));
    }
}
