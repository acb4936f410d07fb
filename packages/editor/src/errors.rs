//! Error types for the editor

use thiserror::Error;
use zenith_assistant::GenerateError;
use zenith_schema::SchemaError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("A block with id {0} already exists")]
    DuplicateBlockId(String),

    #[error("Index {index} out of bounds for {len} blocks")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Block {block_id} has no element at index {index}")]
    ElementNotFound { block_id: String, index: usize },

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Invalid patch: {0}")]
    Schema(#[from] SchemaError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerateError),
}
