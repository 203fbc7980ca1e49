//! Error types for the mutator catalog
//!
//! Mutator execution itself has no error taxonomy: every predicate is total
//! and a non-matching node simply produces no candidates. Errors exist only on
//! the configuration surface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading and applying catalog configuration
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{}': {error}", path.display())]
    ConfigRead { path: PathBuf, error: String },

    /// Configuration file is not valid YAML for a mutator config
    #[error("Failed to parse config file '{}': {error}", path.display())]
    ConfigParse { path: PathBuf, error: String },

    /// A configured mutator name does not exist in the catalog
    #[error("Unknown mutator '{name}'\n  Known mutators: {}", known.join(", "))]
    UnknownMutator { name: String, known: Vec<String> },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
