#![warn(
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

mod book;
mod error;
mod slot;
mod store;

// Re-export the slot contract so callers only need this crate
pub use recipebook_core::Slot;

pub use book::{Listing, ListingEntry, RecipeBook};
pub use error::{Result, StoreError};
pub use slot::{FileSlot, MemorySlot};
pub use store::Store;
