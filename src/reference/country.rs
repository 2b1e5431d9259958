//! Sovereign & macro risk scores by country

use std::collections::HashMap;

use super::checked_score;
use crate::error::TableError;

/// Score used for any country missing from the table
pub const DEFAULT_SOVEREIGN_SCORE: u8 = 70;

/// Country name -> sovereign risk score (0-100, higher is safer)
#[derive(Debug, Clone)]
pub struct CountryRiskTable {
    scores: HashMap<String, u8>,
}

impl Default for CountryRiskTable {
    fn default() -> Self {
        let scores = [
            ("Kenya", 78),
            ("Ghana", 72),
            ("Nigeria", 70),
            ("Rwanda", 82),
            ("South Africa", 75),
            ("Egypt", 68),
            ("Morocco", 80),
            ("Namibia", 76),
            ("Botswana", 85),
            ("Mauritius", 88),
        ]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect();

        Self { scores }
    }
}

impl CountryRiskTable {
    /// Exact, case-sensitive lookup
    pub fn get(&self, country: &str) -> Option<u8> {
        self.scores.get(country).copied()
    }

    /// Sovereign score, silently degrading to `DEFAULT_SOVEREIGN_SCORE`
    pub fn score(&self, country: &str) -> u8 {
        self.get(country).unwrap_or(DEFAULT_SOVEREIGN_SCORE)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries() {
        let table = CountryRiskTable::default();
        assert_eq!(table.len(), 10);
        assert_eq!(table.score("Kenya"), 78);
        assert_eq!(table.score("Mauritius"), 88);
        assert_eq!(table.score("Egypt"), 68);
        assert_eq!(table.score("South Africa"), 75);
    }

    #[test]
    fn test_unknown_country_falls_back() {
        let table = CountryRiskTable::default();
        assert_eq!(table.get("Atlantis"), None);
        assert_eq!(table.score("Atlantis"), 70);
        // Lookup is by exact name
        assert_eq!(table.score("kenya"), 70);
        assert_eq!(table.score(""), 70);
    }
}
