//! Raw external records and their validation into `FinancialProfile`
//!
//! This is the only place where malformed input is detected. Categorical
//! fallbacks and out-of-range values are logged here so the scoring code
//! stays silent and total.

use serde::{Deserialize, Serialize};

use super::{FinancialProfile, Flag};
use crate::error::ProfileError;

/// Required attributes, in template column order
pub const FIELD_NAMES: [&str; 14] = [
    "company_name",
    "country",
    "sector",
    "revenue_usd",
    "ebitda_usd",
    "total_debt_usd",
    "cash_usd",
    "operating_cashflow_usd",
    "interest_expense_usd",
    "fx_debt_percentage",
    "has_bank_restructuring",
    "payment_delays_days",
    "mobile_money_share",
    "audited_financials",
];

/// One company as supplied by a CSV row or JSON object.
/// Every field is optional so that all gaps can be reported at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub revenue_usd: Option<f64>,
    #[serde(default)]
    pub ebitda_usd: Option<f64>,
    #[serde(default)]
    pub total_debt_usd: Option<f64>,
    #[serde(default)]
    pub cash_usd: Option<f64>,
    #[serde(default)]
    pub operating_cashflow_usd: Option<f64>,
    #[serde(default)]
    pub interest_expense_usd: Option<f64>,
    #[serde(default)]
    pub fx_debt_percentage: Option<f64>,
    #[serde(default)]
    pub has_bank_restructuring: Option<String>,
    #[serde(default)]
    pub payment_delays_days: Option<u32>,
    #[serde(default)]
    pub mobile_money_share: Option<f64>,
    #[serde(default)]
    pub audited_financials: Option<String>,
}

/// Collects absent fields while unpacking a record
struct Gaps(Vec<&'static str>);

impl Gaps {
    fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.0.push(name);
                String::new()
            }
        }
    }

    fn number(&mut self, name: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => v,
            _ => {
                self.0.push(name);
                0.0
            }
        }
    }

    fn count(&mut self, name: &'static str, value: Option<u32>) -> u32 {
        value.unwrap_or_else(|| {
            self.0.push(name);
            0
        })
    }
}

impl ProfileRecord {
    /// Validate a standalone record (e.g. a JSON request body)
    pub fn validate(self) -> Result<FinancialProfile, ProfileError> {
        self.validate_labeled("unnamed record")
    }

    /// Validate, naming the record by `fallback` if it has no company name
    pub(crate) fn validate_labeled(self, fallback: &str) -> Result<FinancialProfile, ProfileError> {
        let mut gaps = Gaps(Vec::new());

        let company_name = gaps.text("company_name", self.company_name);
        let country = gaps.text("country", self.country);
        let sector = gaps.text("sector", self.sector);
        let revenue_usd = gaps.number("revenue_usd", self.revenue_usd);
        let ebitda_usd = gaps.number("ebitda_usd", self.ebitda_usd);
        let total_debt_usd = gaps.number("total_debt_usd", self.total_debt_usd);
        let cash_usd = gaps.number("cash_usd", self.cash_usd);
        let operating_cashflow_usd = gaps.number("operating_cashflow_usd", self.operating_cashflow_usd);
        let interest_expense_usd = gaps.number("interest_expense_usd", self.interest_expense_usd);
        let fx_debt_percentage = gaps.number("fx_debt_percentage", self.fx_debt_percentage);
        let restructuring = gaps.text("has_bank_restructuring", self.has_bank_restructuring);
        let payment_delays_days = gaps.count("payment_delays_days", self.payment_delays_days);
        let mobile_money_share = gaps.number("mobile_money_share", self.mobile_money_share);
        let audited = gaps.text("audited_financials", self.audited_financials);

        if !gaps.0.is_empty() {
            let company = if company_name.is_empty() { fallback.to_string() } else { company_name };
            return Err(ProfileError::MissingField { company, fields: gaps.0 });
        }

        let has_bank_restructuring = flag_field(&company_name, "has_bank_restructuring", &restructuring);
        let audited_financials = flag_field(&company_name, "audited_financials", &audited);

        let profile = FinancialProfile {
            company_name,
            country,
            sector,
            revenue_usd,
            ebitda_usd,
            total_debt_usd,
            cash_usd,
            operating_cashflow_usd,
            interest_expense_usd,
            fx_debt_percentage,
            has_bank_restructuring,
            payment_delays_days,
            mobile_money_share,
            audited_financials,
        };
        warn_out_of_range(&profile);
        Ok(profile)
    }
}

fn flag_field(company: &str, field: &str, text: &str) -> Flag {
    if !Flag::is_recognised(text) {
        log::warn!("{}: {} = {:?} is not yes/no, treating as \"no\"", company, field, text);
    }
    Flag::parse(text)
}

/// Values outside their documented range are scored as given
fn warn_out_of_range(p: &FinancialProfile) {
    let amounts = [
        ("revenue_usd", p.revenue_usd),
        ("ebitda_usd", p.ebitda_usd),
        ("total_debt_usd", p.total_debt_usd),
        ("cash_usd", p.cash_usd),
        ("operating_cashflow_usd", p.operating_cashflow_usd),
        ("interest_expense_usd", p.interest_expense_usd),
    ];
    for (field, value) in amounts {
        if value < 0.0 {
            log::warn!("{}: {} is negative ({})", p.company_name, field, value);
        }
    }

    let shares = [
        ("fx_debt_percentage", p.fx_debt_percentage),
        ("mobile_money_share", p.mobile_money_share),
    ];
    for (field, value) in shares {
        if !(0.0..=100.0).contains(&value) {
            log::warn!("{}: {} outside 0-100 ({})", p.company_name, field, value);
        }
    }
}
