//! Stress & forward-looking score (SSS)
//!
//! Seeded from the financial strength score, haircut for foreign-currency
//! debt, then nudged by the same liquidity ratio FSS uses.

use super::{clamp_score, ratios};
use crate::profile::FinancialProfile;

const FSS_CARRY: f64 = 0.85;
const FX_SENSITIVITY: f64 = 0.3;
const LIQUIDITY_ADJUSTMENT: f64 = 5.0;

pub fn score(profile: &FinancialProfile, fss: f64) -> f64 {
    let fx_stress = profile.fx_debt_percentage / 100.0;
    let mut score = fss * FSS_CARRY * (1.0 - fx_stress * FX_SENSITIVITY);

    let liquidity = ratios::liquidity(profile);
    if liquidity > 1.2 {
        score += LIQUIDITY_ADJUSTMENT;
    } else if liquidity < 0.8 {
        score -= LIQUIDITY_ADJUSTMENT;
    }

    clamp_score(score)
}
