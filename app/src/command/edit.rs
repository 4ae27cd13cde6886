use recipebook_config::Config;
use recipebook_core::{RecipeForm, Selection};
use tracing::info;

use super::{StorageOptions, open_book, to_index, user_error};

/// Input parameters for the Edit command strategy.
///
/// Only the fields that are `Some` change; the rest keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct EditInput {
    pub storage: StorageOptions,
    pub number: usize,
    pub name: Option<String>,
    pub category: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
}

impl EditInput {
    fn apply(self, form: &mut RecipeForm) {
        let fields = [
            (&mut form.name, self.name),
            (&mut form.category, self.category),
            (&mut form.ingredients, self.ingredients),
            (&mut form.instructions, self.instructions),
            (&mut form.notes, self.notes),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Strategy for editing a stored recipe.
///
/// The stored recipe prefills the form, the given fields are overlaid, and
/// the result is validated and written back in place.
#[derive(Debug, Clone, Copy)]
pub struct EditStrategy;

impl super::CommandStrategy for EditStrategy {
    type Input = EditInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let book = open_book(&config, &input.storage)?;

        let index = to_index(input.number)?;
        let current = book
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("No recipe #{}", input.number))?;

        let selection = Selection::Viewing(index).begin_edit();
        let mut form = RecipeForm::from(&current);
        input.apply(&mut form);

        let index = book.save(form, selection).map_err(user_error)?;
        info!("Edited recipe at index {}", index);
        println!("Updated recipe #{}", index + 1);
        Ok(())
    }
}
