//! Recipe filtering.
//!
//! Two filters exist: a normalized multi-keyword substring match over the
//! ingredients text, and exact category equality. Both keep the store order;
//! there is no ranking.

use tracing::debug;

use crate::normalize::normalize;
use crate::recipe::{Category, Recipe};

/// Shown instead of a list when a filter matched nothing.
pub const NO_MATCH_MESSAGE: &str = "一致するレシピはありません。";

/// A parsed ingredient query.
///
/// Keywords are normalized once at parse time. A recipe matches when every
/// keyword is a substring of its normalized ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    keywords: Vec<String>,
}

impl IngredientQuery {
    /// Split on runs of whitespace (full-width space included) and normalize
    /// each token. Tokens that normalize to nothing are dropped.
    #[must_use]
    pub fn parse(raw_query: &str) -> Self {
        let keywords = raw_query
            .split_whitespace()
            .map(normalize)
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// A query without keywords matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let haystack = normalize(&recipe.ingredients);
        self.keywords
            .iter()
            .all(|keyword| haystack.contains(keyword.as_str()))
    }
}

/// Keep recipes whose ingredients contain every keyword of `raw_query`.
#[must_use]
pub fn search_by_ingredient(recipes: &[Recipe], raw_query: &str) -> Vec<Recipe> {
    let query = IngredientQuery::parse(raw_query);
    let matches: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| query.matches(recipe))
        .cloned()
        .collect();

    debug!(
        "Ingredient search {:?}: {} of {} recipes matched",
        query.keywords(),
        matches.len(),
        recipes.len()
    );
    matches
}

/// Keep recipes whose category equals `category` exactly.
#[must_use]
pub fn search_by_category(recipes: &[Recipe], category: &Category) -> Vec<Recipe> {
    let matches: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| recipe.category == *category)
        .cloned()
        .collect();

    debug!(
        "Category search {}: {} of {} recipes matched",
        category,
        matches.len(),
        recipes.len()
    );
    matches
}

/// What the list view is currently filtering by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    All,
    Ingredient(String),
    Category(Category),
}

/// Result of applying a [`SearchMode`].
///
/// `Filtered(vec![])` means a search ran and matched nothing, which a front
/// end reports with [`NO_MATCH_MESSAGE`]. `Unfiltered` is the plain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Unfiltered(Vec<Recipe>),
    Filtered(Vec<Recipe>),
}

impl SearchOutcome {
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            Self::Unfiltered(recipes) | Self::Filtered(recipes) => recipes,
        }
    }

    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::Unfiltered(recipes) | Self::Filtered(recipes) => recipes,
        }
    }

    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        matches!(self, Self::Filtered(_))
    }

    /// A search ran and matched nothing.
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::Filtered(recipes) if recipes.is_empty())
    }
}

#[must_use]
pub fn search(recipes: &[Recipe], mode: &SearchMode) -> SearchOutcome {
    match mode {
        SearchMode::All => SearchOutcome::Unfiltered(recipes.to_vec()),
        SearchMode::Ingredient(raw_query) => {
            SearchOutcome::Filtered(search_by_ingredient(recipes, raw_query))
        }
        SearchMode::Category(category) => {
            SearchOutcome::Filtered(search_by_category(recipes, category))
        }
    }
}
