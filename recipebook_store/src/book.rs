//! The recipe catalog as seen by a front end.
//!
//! [`RecipeBook`] is the only surface a view layer needs: list, look up,
//! create, update, delete and search. It holds no view state; the caller's
//! [`Selection`] is passed in where an operation depends on it.

use recipebook_core::{
    Category, Recipe, RecipeForm, SearchMode, SearchOutcome, Selection, Slot, resolve_index,
    search, search_by_category, search_by_ingredient,
};
use tracing::info;

use crate::error::Result;
use crate::store::Store;

/// One row of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Position in the full collection, re-derived from the recipe's identity.
    pub index: Option<usize>,
    pub recipe: Recipe,
}

/// A list view: the rows to show and whether a filter produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub filtered: bool,
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A filter ran and matched nothing.
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        self.filtered && self.entries.is_empty()
    }
}

#[derive(Debug)]
pub struct RecipeBook<S> {
    store: Store<S>,
}

impl<S: Slot> RecipeBook<S> {
    pub const fn new(slot: S) -> Self {
        Self {
            store: Store::new(slot),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Store<S> {
        &self.store
    }

    #[must_use]
    pub fn get_all(&self) -> Vec<Recipe> {
        self.store.load()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Recipe> {
        self.store.load().into_iter().nth(index)
    }

    /// Validate and append. Returns the new recipe's index.
    pub fn create(&self, recipe: Recipe) -> Result<usize> {
        recipe.validate()?;
        self.store.append(recipe)
    }

    /// Validate and overwrite the recipe at `index`.
    pub fn update(&self, index: usize, recipe: Recipe) -> Result<()> {
        recipe.validate()?;
        self.store.replace(index, recipe)
    }

    pub fn delete(&self, index: usize) -> Result<Recipe> {
        self.store.remove_at(index)
    }

    /// Save form input: overwrite the recipe being edited, or append.
    ///
    /// The form is rejected before any write if a required field is blank.
    pub fn save(&self, form: RecipeForm, selection: Selection) -> Result<usize> {
        let recipe = Recipe::try_from(form)?;
        match selection.edit_target() {
            Some(index) => {
                self.store.replace(index, recipe)?;
                Ok(index)
            }
            None => self.store.append(recipe),
        }
    }

    #[must_use]
    pub fn filter_by_ingredient(&self, query: &str) -> Vec<Recipe> {
        search_by_ingredient(&self.store.load(), query)
    }

    #[must_use]
    pub fn filter_by_category(&self, category: &Category) -> Vec<Recipe> {
        search_by_category(&self.store.load(), category)
    }

    #[must_use]
    pub fn search(&self, mode: &SearchMode) -> SearchOutcome {
        search(&self.store.load(), mode)
    }

    /// Position of `displayed` in the full collection.
    #[must_use]
    pub fn resolve_index(&self, displayed: &Recipe) -> Option<usize> {
        resolve_index(&self.store.load(), displayed)
    }

    /// Build a list view for `mode`, with each row traced back to its index.
    #[must_use]
    pub fn listing(&self, mode: &SearchMode) -> Listing {
        let all = self.store.load();
        let outcome = search(&all, mode);
        let filtered = outcome.is_filtered();

        let entries: Vec<ListingEntry> = outcome
            .into_recipes()
            .into_iter()
            .map(|recipe| ListingEntry {
                index: resolve_index(&all, &recipe),
                recipe,
            })
            .collect();

        info!(
            "Listing {:?}: {} of {} recipes",
            mode,
            entries.len(),
            all.len()
        );
        Listing { filtered, entries }
    }
}
