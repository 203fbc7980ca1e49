//! Mutator selection configuration
//!
//! Lets a project enable a subset of the catalog without touching the
//! registry itself. An empty `included` list means "all mutators";
//! `excluded` always wins over `included`.

use serde::Deserialize;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Which mutators of the catalog to run
#[derive(Debug, Default, Deserialize)]
pub struct MutatorConfig {
    /// Mutator names to run; empty means the whole catalog
    #[serde(default)]
    pub included: Vec<String>,
    /// Mutator names to skip
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl MutatorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CatalogError::ConfigParse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Whether a mutator with this name is selected by the configuration
    pub fn selects(&self, name: &str) -> bool {
        if self.excluded.iter().any(|n| n == name) {
            return false;
        }
        self.included.is_empty() || self.included.iter().any(|n| n == name)
    }

    /// All names this configuration mentions, for validation against the
    /// registry
    pub fn mentioned_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.included
            .iter()
            .chain(self.excluded.iter())
            .map(String::as_str)
    }
}
