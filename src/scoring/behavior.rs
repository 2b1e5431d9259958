//! Financier behaviour score (OCBS)

use super::clamp_score;
use crate::profile::FinancialProfile;

const BASE: f64 = 80.0;
const RESTRUCTURING_PENALTY: f64 = 15.0;

pub fn score(profile: &FinancialProfile) -> f64 {
    let mut score = BASE;
    if profile.has_bank_restructuring.is_yes() {
        score -= RESTRUCTURING_PENALTY;
    }
    score += delay_adjustment(profile.payment_delays_days);
    clamp_score(score)
}

/// Exactly one adjustment applies; first match wins
fn delay_adjustment(days: u32) -> f64 {
    if days < 30 {
        10.0
    } else if days < 60 {
        5.0
    } else if days > 90 {
        -15.0
    } else if days > 60 {
        -10.0
    } else {
        0.0
    }
}
