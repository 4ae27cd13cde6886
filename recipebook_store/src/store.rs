//! Whole-collection persistence of recipes in a single slot.
//!
//! The stored value is a JSON array of recipes. Every mutation loads the
//! full array, changes it, and writes the full array back; there is no
//! partial update.

use recipebook_core::{Recipe, Slot};
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};

/// Ordered recipe collection backed by one [`Slot`].
#[derive(Debug)]
pub struct Store<S> {
    slot: S,
}

impl<S: Slot> Store<S> {
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Get a reference to the underlying slot.
    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Read the collection.
    ///
    /// An absent, unreadable or malformed slot reads as an empty collection.
    #[must_use]
    pub fn load(&self) -> Vec<Recipe> {
        self.read_all().unwrap_or_else(|e| {
            warn!(
                "Failed to read slot '{}', treating as empty: {}",
                self.slot.key(),
                e
            );
            Vec::new()
        })
    }

    /// Read the collection for a mutation.
    ///
    /// Absent or malformed data is empty, but a failed read is an error so
    /// the following write cannot overwrite recipes that were never seen.
    fn read_all(&self) -> Result<Vec<Recipe>> {
        let Some(raw) = self.slot.read()? else {
            debug!("Slot '{}' is empty", self.slot.key());
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => {
                debug!("Loaded {} recipes from '{}'", recipes.len(), self.slot.key());
                Ok(recipes)
            }
            Err(e) => {
                warn!(
                    "Slot '{}' holds malformed data, treating as empty: {}",
                    self.slot.key(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored collection with `recipes`.
    pub fn save_all(&self, recipes: &[Recipe]) -> Result<()> {
        let json = serde_json::to_string(recipes)?;
        self.slot.write(&json)?;
        debug!("Saved {} recipes to '{}'", recipes.len(), self.slot.key());
        Ok(())
    }

    /// Add `recipe` at the end. Returns its index.
    pub fn append(&self, recipe: Recipe) -> Result<usize> {
        let mut recipes = self.read_all()?;
        recipes.push(recipe);
        self.save_all(&recipes)?;

        let index = recipes.len() - 1;
        info!("Appended recipe at index {}", index);
        Ok(index)
    }

    /// Overwrite the recipe at `index`.
    pub fn replace(&self, index: usize, recipe: Recipe) -> Result<()> {
        let mut recipes = self.read_all()?;
        let len = recipes.len();
        let slot = recipes
            .get_mut(index)
            .ok_or(StoreError::InvalidIndex { index, len })?;
        *slot = recipe;
        self.save_all(&recipes)?;

        info!("Replaced recipe at index {}", index);
        Ok(())
    }

    /// Remove the recipe at `index`, shifting later recipes down by one.
    pub fn remove_at(&self, index: usize) -> Result<Recipe> {
        let mut recipes = self.read_all()?;
        if index >= recipes.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: recipes.len(),
            });
        }
        let removed = recipes.remove(index);
        self.save_all(&recipes)?;

        info!("Removed recipe at index {}", index);
        Ok(removed)
    }
}
