//! Validated input record for one company

use serde::{Deserialize, Serialize};

/// Boolean-like attribute supplied externally as "yes"/"no" text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    /// Exact case-insensitive "yes" is `Yes`; everything else is `No`
    pub fn parse(text: &str) -> Self {
        if text.eq_ignore_ascii_case("yes") {
            Flag::Yes
        } else {
            Flag::No
        }
    }

    /// True when `text` is one of the two recognised spellings
    pub fn is_recognised(text: &str) -> bool {
        text.eq_ignore_ascii_case("yes") || text.eq_ignore_ascii_case("no")
    }

    pub fn is_yes(self) -> bool {
        self == Flag::Yes
    }
}

/// Financial, behavioural and country/sector attributes of one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub company_name: String,
    /// Looked up in the sovereign risk table
    pub country: String,
    /// Informational only
    pub sector: String,

    pub revenue_usd: f64,
    pub ebitda_usd: f64,
    pub total_debt_usd: f64,
    pub cash_usd: f64,
    pub operating_cashflow_usd: f64,
    pub interest_expense_usd: f64,

    /// Share of debt in foreign currency (0-100)
    pub fx_debt_percentage: f64,
    pub has_bank_restructuring: Flag,
    /// Average supplier payment delay
    pub payment_delays_days: u32,
    /// Share of revenue collected via mobile money (0-100)
    pub mobile_money_share: f64,
    pub audited_financials: Flag,
}
