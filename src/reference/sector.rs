//! Sector risk scores
//!
//! Carried for reporting only. The composite rating does not consult this
//! table; a sector-weighted composite would be a separate model variant.

use std::collections::HashMap;

use super::checked_score;
use crate::error::TableError;

#[derive(Debug, Clone)]
pub struct SectorRiskTable {
    scores: HashMap<String, u8>,
}

impl Default for SectorRiskTable {
    fn default() -> Self {
        let scores = [
            ("Banking", 75),
            ("Telecom", 82),
            ("Manufacturing", 70),
            ("Agriculture", 65),
            ("Energy", 72),
            ("Mining", 68),
            ("Retail", 73),
            ("Technology", 78),
            ("Logistics", 74),
            ("Real Estate", 69),
        ]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect();

        Self { scores }
    }
}

impl SectorRiskTable {
    pub fn get(&self, sector: &str) -> Option<u8> {
        self.scores.get(sector).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub(crate) fn merge(&mut self, overrides: &HashMap<String, i64>) -> Result<(), TableError> {
        for (name, &score) in overrides {
            self.scores.insert(name.clone(), checked_score(name, score)?);
        }
        Ok(())
    }
}
