//! Company financial profiles and the input validation boundary

mod data;
mod record;
pub mod loader;
pub mod template;

pub use data::{FinancialProfile, Flag};
pub use record::{ProfileRecord, FIELD_NAMES};
pub use loader::{load_profiles, load_profiles_from_reader, find_company};
pub use template::write_template;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{FinancialProfile, Flag};

    /// First row of the sample template: the reference scenario
    pub fn kenya_manufacturer() -> FinancialProfile {
        FinancialProfile {
            company_name: "Example Company Ltd".to_string(),
            country: "Kenya".to_string(),
            sector: "Manufacturing".to_string(),
            revenue_usd: 50_000_000.0,
            ebitda_usd: 8_000_000.0,
            total_debt_usd: 25_000_000.0,
            cash_usd: 5_000_000.0,
            operating_cashflow_usd: 10_000_000.0,
            interest_expense_usd: 1_500_000.0,
            fx_debt_percentage: 45.0,
            has_bank_restructuring: Flag::No,
            payment_delays_days: 30,
            mobile_money_share: 75.0,
            audited_financials: Flag::Yes,
        }
    }
}
