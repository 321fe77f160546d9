//! Errors raised while reading or writing Pandoc JSON

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognised document layout: expected an object with \"blocks\" or a [meta, blocks] array")]
    UnknownLayout,
}

/// Result type for AST operations
pub type Result<T> = std::result::Result<T, AstError>;
