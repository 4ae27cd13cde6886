use recipebook_config::Config;
use recipebook_core::{RecipeForm, Selection};

use super::{StorageOptions, open_book, user_error};

/// Input parameters for the Add command strategy.
#[derive(Debug, Clone)]
pub struct AddInput {
    pub storage: StorageOptions,
    pub name: String,
    /// Falls back to `display.default_category` when omitted
    pub category: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub notes: Option<String>,
}

/// Strategy for saving a new recipe.
///
/// The form is validated before anything is written; a blank required field
/// is reported with the form's message and the catalog stays unchanged.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = AddInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let book = open_book(&config, &input.storage)?;

        let form = RecipeForm {
            name: input.name,
            category: input
                .category
                .unwrap_or_else(|| config.display.category().to_string()),
            ingredients: input.ingredients,
            instructions: input.instructions,
            notes: input.notes.unwrap_or_default(),
        };

        let index = book.save(form, Selection::None).map_err(user_error)?;
        println!("Saved recipe #{}", index + 1);
        Ok(())
    }
}
