use thiserror::Error;

/// Errors raised while building or patching block payloads
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("Invalid content for {block_type}: {message}")]
    InvalidContent { block_type: String, message: String },

    #[error("Invalid styles: {0}")]
    InvalidStyles(String),

    #[error("Invalid field path: {0}")]
    InvalidFieldPath(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

impl SchemaError {
    pub(crate) fn content(block_type: &str, err: impl std::fmt::Display) -> Self {
        SchemaError::InvalidContent {
            block_type: block_type.to_string(),
            message: err.to_string(),
        }
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;
