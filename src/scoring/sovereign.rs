//! Sovereign & macro risk score (CRS)

use crate::reference::CountryRiskTable;

/// Table score for `country`, or the default for unknown names.
/// Never fails.
pub fn score(table: &CountryRiskTable, country: &str) -> u8 {
    table.score(country)
}
