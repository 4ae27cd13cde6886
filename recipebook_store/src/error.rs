use recipebook_core::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid index {index} (collection has {len} recipes)")]
    InvalidIndex { index: usize, len: usize },

    #[error("invalid recipe: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
