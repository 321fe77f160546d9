//! Filter errors

use single_pdf_ast::AstError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a filter run
///
/// Malformed nodes are not errors: they are passed through unchanged.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Ast(#[from] AstError),

    #[error("Failed to read link target {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Link target is empty: {}", .path.display())]
    EmptyTarget { path: PathBuf },
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
