//! Reference tables: sovereign and sector risk scores looked up by name
//!
//! Tables are built once at process start (defaults, optionally merged with
//! JSON overrides) and handed to the engine by shared reference.

mod country;
mod sector;
mod overrides;

pub use country::{CountryRiskTable, DEFAULT_SOVEREIGN_SCORE};
pub use sector::SectorRiskTable;
pub use overrides::TableOverrides;

use crate::error::TableError;
use std::path::Path;

/// All read-only lookup data needed by a rating run
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub countries: CountryRiskTable,
    pub sectors: SectorRiskTable,
}

impl ReferenceTables {
    /// Built-in tables merged with the given overrides (override wins)
    pub fn with_overrides(overrides: &TableOverrides) -> Result<Self, TableError> {
        let mut tables = Self::default();
        tables.countries.merge(&overrides.countries)?;
        tables.sectors.merge(&overrides.sectors)?;
        Ok(tables)
    }

    /// Load overrides from a JSON file and merge them onto the defaults
    pub fn from_overrides_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let overrides = TableOverrides::load(path)?;
        Self::with_overrides(&overrides)
    }

    /// Informational sector score; not part of the composite
    pub fn sector_risk(&self, sector: &str) -> Option<u8> {
        self.sectors.get(sector)
    }
}

/// Convert a configured score to the table's range
pub(crate) fn checked_score(name: &str, score: i64) -> Result<u8, TableError> {
    if (0..=100).contains(&score) {
        Ok(score as u8)
    } else {
        Err(TableError::ScoreOutOfRange { name: name.to_string(), score })
    }
}
