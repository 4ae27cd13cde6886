//! Mapping displayed recipes back to storage positions.
//!
//! Recipes carry no identifier. A recipe shown in a filtered list is traced
//! back to the full collection by the first entry with an equal
//! (name, category, ingredients, instructions) tuple. Two recipes that agree
//! on all four fields cannot be told apart; the first one always wins.

use crate::recipe::Recipe;

/// Index of the first recipe in `all` with the same identity as `displayed`.
#[must_use]
pub fn resolve_index(all: &[Recipe], displayed: &Recipe) -> Option<usize> {
    all.iter().position(|candidate| candidate.same_identity(displayed))
}

/// Resolve every recipe of a filtered view.
#[must_use]
pub fn resolve_indices<'a>(
    all: &[Recipe],
    shown: &'a [Recipe],
) -> Vec<(Option<usize>, &'a Recipe)> {
    shown
        .iter()
        .map(|recipe| (resolve_index(all, recipe), recipe))
        .collect()
}
