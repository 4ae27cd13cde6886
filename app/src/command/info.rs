use std::collections::BTreeMap;

use recipebook_config::Config;
use recipebook_core::Slot;
use tracing::info;

use super::{StorageOptions, open_book};

/// Strategy for displaying configuration and catalog information.
///
/// Outputs the effective storage location, display defaults and a count of
/// stored recipes per category.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = StorageOptions;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let book = open_book(&config, &input)?;

        println!("=== recipebook Configuration ===\n");

        println!("Config:");
        println!("  Directory: {}", Config::config_dir()?.display());
        println!();

        println!("Storage:");
        println!("  Slot Key: {}", book.store().slot().key());
        println!("  File: {}", book.store().slot().path().display());
        println!();

        println!("Display:");
        println!("  Default Category: {}", config.display.category());
        println!();

        info!("Counting stored recipes");
        let recipes = book.get_all();
        println!("Recipes: {}", recipes.len());

        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        for recipe in &recipes {
            *by_category
                .entry(recipe.category.as_str().to_string())
                .or_default() += 1;
        }
        for (category, count) in by_category {
            println!("  {category}: {count}");
        }

        Ok(())
    }
}
