//! Financial strength score (FSS)
//!
//! Base 50 plus one stepped bonus per ratio. Only the upper bound is
//! clamped: every bonus is non-negative, so the floor is the base itself.

use super::FinancialRatios;
use crate::profile::FinancialProfile;

const BASE: f64 = 50.0;
const CAP: f64 = 100.0;

pub fn score(profile: &FinancialProfile) -> f64 {
    score_ratios(&FinancialRatios::from_profile(profile))
}

pub fn score_ratios(ratios: &FinancialRatios) -> f64 {
    let total = BASE
        + leverage_bonus(ratios.debt_to_ebitda)
        + coverage_bonus(ratios.interest_coverage)
        + cashflow_bonus(ratios.ocf_to_debt)
        + liquidity_bonus(ratios.liquidity);
    total.min(CAP)
}

fn leverage_bonus(debt_to_ebitda: f64) -> f64 {
    if debt_to_ebitda < 2.0 {
        15.0
    } else if debt_to_ebitda < 3.0 {
        10.0
    } else if debt_to_ebitda < 4.0 {
        5.0
    } else {
        0.0
    }
}

fn coverage_bonus(interest_coverage: f64) -> f64 {
    if interest_coverage > 5.0 {
        15.0
    } else if interest_coverage > 3.0 {
        10.0
    } else if interest_coverage > 2.0 {
        5.0
    } else {
        0.0
    }
}

fn cashflow_bonus(ocf_to_debt: f64) -> f64 {
    if ocf_to_debt > 0.3 {
        10.0
    } else if ocf_to_debt > 0.2 {
        6.0
    } else if ocf_to_debt > 0.1 {
        3.0
    } else {
        0.0
    }
}

fn liquidity_bonus(liquidity: f64) -> f64 {
    if liquidity > 1.5 {
        10.0
    } else if liquidity > 1.0 {
        6.0
    } else if liquidity > 0.5 {
        3.0
    } else {
        0.0
    }
}
