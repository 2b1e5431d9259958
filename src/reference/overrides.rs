//! JSON configuration for adjusting the built-in reference tables
//!
//! ```json
//! { "countries": { "Uganda": 74 }, "sectors": { "Fintech": 77 } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::TableError;

/// Scores to add to, or replace in, the default tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOverrides {
    /// Country name -> sovereign score
    #[serde(default)]
    pub countries: HashMap<String, i64>,

    /// Sector name -> sector score
    #[serde(default)]
    pub sectors: HashMap<String, i64>,
}

impl TableOverrides {
    pub fn from_json(text: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides = Self::from_json(&text)?;
        log::info!(
            "Loaded table overrides from {}: {} countries, {} sectors",
            path.display(),
            overrides.countries.len(),
            overrides.sectors.len()
        );
        Ok(overrides)
    }
}
