//! SACRM scoring engine
//!
//! Five independent sub-scores feed a fixed-weight composite, which is then
//! mapped to a letter grade and a probability of default. Every function
//! here is pure and total.

mod ratios;
pub mod sovereign;
pub mod financial;
pub mod behavior;
pub mod alt_data;
pub mod stress;
mod composite;
mod grade;
pub mod pd;
mod engine;
mod result;

pub use ratios::FinancialRatios;
pub use composite::SubScores;
pub use grade::Grade;
pub use pd::DefaultProbability;
pub use engine::RatingEngine;
pub use result::{RatingResult, RatedCompany};

// ============================================================================
// Composite Weights
// ============================================================================
// Fixed model weights; they sum to exactly 1.00.

/// Sovereign & macro risk (CRS)
pub const SOVEREIGN_WEIGHT: f64 = 0.30;

/// Financial strength (FSS)
pub const FINANCIAL_STRENGTH_WEIGHT: f64 = 0.25;

/// Financier behaviour (OCBS)
pub const FINANCIER_BEHAVIOR_WEIGHT: f64 = 0.20;

/// Alternative & behavioural data (BRS)
pub const ALT_DATA_WEIGHT: f64 = 0.15;

/// Stress & forward-looking (SSS)
pub const STRESS_WEIGHT: f64 = 0.10;

/// Round the exact binary value to `decimals` places, ties to even
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Clamp a sub-score to the 0-100 scale
pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total = SOVEREIGN_WEIGHT
            + FINANCIAL_STRENGTH_WEIGHT
            + FINANCIER_BEHAVIOR_WEIGHT
            + ALT_DATA_WEIGHT
            + STRESS_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(81.502575, 1), 81.5);
        assert_eq!(round_to(0.8496107, 2), 0.85);
        assert_eq!(round_to(61.0257, 1), 61.0);
    }

    #[test]
    fn test_round_to_exact_ties() {
        // Exactly representable halves go to the even digit
        assert_eq!(round_to(89.25, 1), 89.2);
        assert_eq!(round_to(89.75, 1), 89.8);
        assert_eq!(round_to(0.125, 2), 0.12);
        // 0.85 x 2.3 sits just below 1.955 in binary
        assert_eq!(round_to(0.85 * 2.3, 2), 1.95);
        assert_eq!(round_to(50.0 * 2.3, 2), 115.0);
    }
}
