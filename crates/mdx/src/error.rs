//! Compilation error types.

use thiserror::Error;

/// Errors that can occur while compiling an MDX source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Frontmatter is not terminated")]
    UnterminatedFrontmatter,

    #[error("Invalid frontmatter: {0}")]
    Frontmatter(String),

    #[error("Invalid value for export `{name}`: {reason}")]
    InvalidExport { name: String, reason: String },

    #[error("Unsupported export statement: {0}")]
    UnsupportedExport(String),

    #[error("Duplicate export `{0}`")]
    DuplicateExport(String),

    #[error("Invalid import statement: {0}")]
    InvalidImport(String),
}

pub type Result<T> = std::result::Result<T, CompileError>;
