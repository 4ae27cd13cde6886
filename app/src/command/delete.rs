use std::io::{self, BufRead, Write};

use recipebook_config::Config;

use super::{StorageOptions, open_book, to_index, user_error};

const CONFIRM_PROMPT: &str = "このレシピを削除しますか？";

/// Input parameters for the Delete command strategy.
#[derive(Debug, Clone)]
pub struct DeleteInput {
    pub storage: StorageOptions,
    pub number: usize,
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// Strategy for deleting a recipe after confirmation.
#[derive(Debug, Clone, Copy)]
pub struct DeleteStrategy;

impl super::CommandStrategy for DeleteStrategy {
    type Input = DeleteInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let book = open_book(&config, &input.storage)?;

        let index = to_index(input.number)?;
        let recipe = book
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("No recipe #{}", input.number))?;

        if !input.yes && !confirm(&format!("{CONFIRM_PROMPT} ({})", recipe.name))? {
            println!("Cancelled");
            return Ok(());
        }

        let removed = book.delete(index).map_err(user_error)?;
        println!("Deleted recipe #{}: {}", input.number, removed.name);
        Ok(())
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "はい")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(is_yes("はい"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
