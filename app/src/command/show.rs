use recipebook_config::Config;

use super::{StorageOptions, open_book, to_index, view};

/// Strategy for the detail view of one recipe.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = (StorageOptions, usize);

    fn execute(&self, (storage, number): Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let book = open_book(&config, &storage)?;

        let index = to_index(number)?;
        let recipe = book
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("No recipe #{number}"))?;

        print!("{}", view::format_detail(index, &recipe));
        Ok(())
    }
}
