//! Weighted composite of the five sub-scores

use serde::{Deserialize, Serialize};

use super::{
    round_to, ALT_DATA_WEIGHT, FINANCIAL_STRENGTH_WEIGHT, FINANCIER_BEHAVIOR_WEIGHT,
    SOVEREIGN_WEIGHT, STRESS_WEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub sovereign: f64,
    pub financial_strength: f64,
    pub financier_behavior: f64,
    pub alt_data: f64,
    pub stress: f64,
}

impl SubScores {
    /// Weighted sum rounded to one decimal. No extra clamping.
    pub fn composite(&self) -> f64 {
        let weighted = self.sovereign * SOVEREIGN_WEIGHT
            + self.financial_strength * FINANCIAL_STRENGTH_WEIGHT
            + self.financier_behavior * FINANCIER_BEHAVIOR_WEIGHT
            + self.alt_data * ALT_DATA_WEIGHT
            + self.stress * STRESS_WEIGHT;
        round_to(weighted, 1)
    }
}
