use recipebook_config::Config;
use recipebook_core::{Category, SearchMode};

use super::{StorageOptions, open_book, view};

/// Input parameters for the List command strategy.
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub storage: StorageOptions,
    /// Space-separated ingredient keywords, all of which must match
    pub ingredient: Option<String>,
    pub category: Option<String>,
}

impl ListInput {
    fn mode(&self) -> anyhow::Result<SearchMode> {
        match (&self.ingredient, &self.category) {
            (Some(query), None) => Ok(SearchMode::Ingredient(query.clone())),
            (None, Some(category)) => Ok(SearchMode::Category(category.parse::<Category>()?)),
            (None, None) => Ok(SearchMode::All),
            (Some(_), Some(_)) => {
                anyhow::bail!("Search by ingredient or by category, not both")
            }
        }
    }
}

/// Strategy for the list view, optionally filtered.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let book = open_book(&config, &input.storage)?;

        let listing = book.listing(&input.mode()?);
        println!("{}", view::format_listing(&listing));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_the_given_filter() {
        let by_ingredient = ListInput {
            ingredient: Some("豚肉 玉ねぎ".to_string()),
            ..ListInput::default()
        };
        assert_eq!(
            by_ingredient.mode().ok(),
            Some(SearchMode::Ingredient("豚肉 玉ねぎ".to_string()))
        );

        let by_category = ListInput {
            category: Some("soup".to_string()),
            ..ListInput::default()
        };
        assert_eq!(
            by_category.mode().ok(),
            Some(SearchMode::Category(Category::Soup))
        );

        assert_eq!(ListInput::default().mode().ok(), Some(SearchMode::All));
    }

    #[test]
    fn both_filters_are_rejected() {
        let input = ListInput {
            ingredient: Some("a".to_string()),
            category: Some("主菜".to_string()),
            ..ListInput::default()
        };
        assert!(input.mode().is_err());
    }
}
