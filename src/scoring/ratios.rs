//! Guarded balance-sheet ratios shared by the financial strength and
//! stress calculators

use serde::{Deserialize, Serialize};

use crate::profile::FinancialProfile;

/// Every denominator is floored at one monetary unit
const MIN_DENOMINATOR: f64 = 1.0;

/// Share of total debt assumed to fall due within the liquidity horizon
const SHORT_TERM_DEBT_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    pub debt_to_ebitda: f64,
    pub interest_coverage: f64,
    pub ocf_to_debt: f64,
    /// Cash over the short-term share of debt
    pub liquidity: f64,
}

impl FinancialRatios {
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        Self {
            debt_to_ebitda: profile.total_debt_usd / profile.ebitda_usd.max(MIN_DENOMINATOR),
            interest_coverage: profile.ebitda_usd / profile.interest_expense_usd.max(MIN_DENOMINATOR),
            ocf_to_debt: profile.operating_cashflow_usd / profile.total_debt_usd.max(MIN_DENOMINATOR),
            liquidity: liquidity(profile),
        }
    }
}

/// Cash coverage of short-term debt
pub(crate) fn liquidity(profile: &FinancialProfile) -> f64 {
    profile.cash_usd / (profile.total_debt_usd * SHORT_TERM_DEBT_SHARE).max(MIN_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixtures::kenya_manufacturer;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_ratios() {
        let ratios = FinancialRatios::from_profile(&kenya_manufacturer());
        assert_abs_diff_eq!(ratios.debt_to_ebitda, 3.125, epsilon = 1e-12);
        assert_abs_diff_eq!(ratios.interest_coverage, 5.333333333, epsilon = 1e-8);
        assert_abs_diff_eq!(ratios.ocf_to_debt, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(ratios.liquidity, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_denominators_are_floored() {
        let profile = FinancialProfile {
            ebitda_usd: 0.0,
            total_debt_usd: 0.0,
            interest_expense_usd: 0.0,
            cash_usd: 500.0,
            operating_cashflow_usd: 300.0,
            ..kenya_manufacturer()
        };
        let ratios = FinancialRatios::from_profile(&profile);
        assert_eq!(ratios.debt_to_ebitda, 0.0);
        assert_eq!(ratios.interest_coverage, 0.0);
        assert_eq!(ratios.ocf_to_debt, 300.0);
        assert_eq!(ratios.liquidity, 500.0);
        assert!(ratios.liquidity.is_finite());
    }

    #[test]
    fn test_small_debt_floors_liquidity_denominator() {
        // 0.2 x 4 = 0.8 < 1, so the floor applies
        let profile = FinancialProfile { total_debt_usd: 4.0, cash_usd: 2.0, ..kenya_manufacturer() };
        assert_eq!(liquidity(&profile), 2.0);
    }
}
