//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input type. The
//! CLI is the view layer of the catalog: it turns arguments into calls on
//! [`RecipeBook`] and prints what comes back.

use std::path::PathBuf;

use recipebook_config::Config;
use recipebook_store::{FileSlot, RecipeBook, StoreError};
use tracing::info;

mod add;
mod delete;
mod edit;
mod info;
mod init;
mod list;
mod show;
mod version;
mod view;

pub use add::{AddInput, AddStrategy};
pub use delete::{DeleteInput, DeleteStrategy};
pub use edit::{EditInput, EditStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use show::ShowStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Every command runs to completion synchronously; persistence has finished
/// by the time `execute` returns.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Options shared by every command that touches the catalog.
#[derive(Debug, Clone, Default)]
pub struct StorageOptions {
    /// Overrides `storage.data_dir` for this invocation.
    pub data_dir: Option<PathBuf>,
}

/// Open the recipe book configured in `config`.
fn open_book(config: &Config, options: &StorageOptions) -> anyhow::Result<RecipeBook<FileSlot>> {
    let data_dir = match &options.data_dir {
        Some(dir) => dir.clone(),
        None => config.storage.resolved_data_dir()?,
    };

    let slot = FileSlot::new(&data_dir, config.storage.slot_key.as_str());
    info!("Recipe slot: {}", slot.path().display());
    Ok(RecipeBook::new(slot))
}

/// Convert a 1-based recipe number from the command line into an index.
fn to_index(number: usize) -> anyhow::Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Recipe numbers start at 1"))
}

/// Turn a store error into a message for the person at the terminal.
fn user_error(err: StoreError) -> anyhow::Error {
    match err {
        StoreError::Validation(e) => anyhow::anyhow!("{} ({e})", e.user_message()),
        StoreError::InvalidIndex { index, len } => {
            anyhow::anyhow!("No recipe #{} (there are {len})", index + 1)
        }
        other => other.into(),
    }
}
