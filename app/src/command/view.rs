//! Plain-text rendering of list and detail views.

use recipebook_core::{NO_MATCH_MESSAGE, Recipe, render};
use recipebook_store::Listing;

pub fn format_listing(listing: &Listing) -> String {
    if listing.is_empty() {
        return if listing.filtered {
            NO_MATCH_MESSAGE.to_string()
        } else {
            "No recipes yet. Add one with 'recipebook add'.".to_string()
        };
    }

    listing
        .entries
        .iter()
        .map(|entry| {
            let number = entry
                .index
                .map_or_else(|| "?".to_string(), |index| (index + 1).to_string());
            format!(
                "{number:>3}. {} [{}]",
                entry.recipe.name, entry.recipe.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_detail(index: usize, recipe: &Recipe) -> String {
    let mut out = format!("#{} {}\n[{}]\n", index + 1, recipe.name, recipe.category);

    push_section(&mut out, "材料", &recipe.ingredients);
    push_section(&mut out, "作り方", &recipe.instructions);
    if !recipe.notes.trim().is_empty() {
        push_section(&mut out, "メモ", &recipe.notes);
    }
    out
}

fn push_section(out: &mut String, title: &str, text: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for line in render::lines(text) {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}
