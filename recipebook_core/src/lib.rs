#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod identity;
pub mod normalize;
pub mod recipe;
pub mod render;
pub mod search;
pub mod selection;

pub use error::{Field, ValidationError};
pub use identity::{resolve_index, resolve_indices};
pub use normalize::{KANJI_READINGS, normalize};
pub use recipe::{Category, Recipe, RecipeForm};
pub use search::{
    IngredientQuery, NO_MATCH_MESSAGE, SearchMode, SearchOutcome, search, search_by_category,
    search_by_ingredient,
};
pub use selection::Selection;

/// Default key of the slot holding the recipe collection.
pub const DEFAULT_SLOT_KEY: &str = "recipes";

/// A single named key-value blob.
///
/// The recipe collection lives in exactly one slot and every mutation
/// rewrites it whole. `read` returns `Ok(None)` when the slot has never been
/// written.
pub trait Slot: Send + Sync {
    fn key(&self) -> &str;

    fn read(&self) -> std::io::Result<Option<String>>;

    fn write(&self, contents: &str) -> std::io::Result<()>;
}
