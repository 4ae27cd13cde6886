//! Helpers for turning recipe text into display output.
//!
//! Recipe text is user input and is never interpolated as markup. Line
//! breaks become `<br>` only after the text itself has been escaped.
//!
//! The HTML helpers are for front ends that embed the catalog in a web
//! view; the bundled CLI prints plain text and only uses [`lines`].

use crate::recipe::Category;

/// Escape text for inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escaped text with each `\n` turned into `<br>`.
#[must_use]
pub fn multiline_html(text: &str) -> String {
    text.split('\n')
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Style hook for a category badge, e.g. `category-主菜`.
#[must_use]
pub fn category_badge_class(category: &Category) -> String {
    format!("category-{}", category.as_str().trim())
}

/// Display lines of a multi-line field, without trailing carriage returns.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.trim_end_matches('\r'))
}
