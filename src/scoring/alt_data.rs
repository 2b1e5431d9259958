//! Alternative & behavioural data score (BRS)

use super::clamp_score;
use crate::profile::FinancialProfile;

const BASE: f64 = 70.0;
const AUDIT_ADJUSTMENT: f64 = 10.0;

pub fn score(profile: &FinancialProfile) -> f64 {
    let mut score = BASE + mobile_money_bonus(profile.mobile_money_share);

    if profile.audited_financials.is_yes() {
        score += AUDIT_ADJUSTMENT;
    } else {
        score -= AUDIT_ADJUSTMENT;
    }

    score += fx_adjustment(profile.fx_debt_percentage);
    clamp_score(score)
}

fn mobile_money_bonus(share: f64) -> f64 {
    if share > 60.0 {
        15.0
    } else if share > 40.0 {
        10.0
    } else if share > 20.0 {
        5.0
    } else {
        0.0
    }
}

fn fx_adjustment(fx_debt_percentage: f64) -> f64 {
    if fx_debt_percentage < 30.0 {
        5.0
    } else if fx_debt_percentage > 60.0 {
        -10.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{fixtures::kenya_manufacturer, Flag};

    #[test]
    fn test_reference_profile() {
        // 70 + 15 (mobile 75%) + 10 (audited), FX 45% neutral
        assert_eq!(score(&kenya_manufacturer()), 95.0);
    }

    #[test]
    fn test_clamped_at_100() {
        let profile = FinancialProfile { fx_debt_percentage: 10.0, ..kenya_manufacturer() };
        // 70 + 15 + 10 + 5 = 100
        assert_eq!(score(&profile), 100.0);
    }

    #[test]
    fn test_unaudited_high_fx() {
        let profile = FinancialProfile {
            mobile_money_share: 20.0,
            audited_financials: Flag::No,
            fx_debt_percentage: 61.0,
            ..kenya_manufacturer()
        };
        // 70 + 0 - 10 - 10
        assert_eq!(score(&profile), 50.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(mobile_money_bonus(60.0), 10.0);
        assert_eq!(mobile_money_bonus(40.0), 5.0);
        assert_eq!(fx_adjustment(30.0), 0.0);
        assert_eq!(fx_adjustment(60.0), 0.0);
        assert_eq!(fx_adjustment(29.9), 5.0);
    }
}
