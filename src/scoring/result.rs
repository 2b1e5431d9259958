//! Rating outputs handed to presentation layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FinancialRatios, Grade};

/// Scores, grade and PD for one company. Contains nothing time- or
/// environment-dependent, so identical profiles give identical results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub sovereign: f64,
    pub financial_strength: f64,
    pub financier_behavior: f64,
    pub alt_data: f64,
    pub stress: f64,
    /// One decimal
    pub composite: f64,
    pub grade: Grade,
    /// Percent, two decimals
    pub pd_1y: f64,
    /// Percent, two decimals
    pub pd_3y: f64,
}

/// A rating together with the identifying and informational context a
/// report needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedCompany {
    pub company_name: String,
    pub country: String,
    pub sector: String,
    /// Informational; not part of the composite
    pub sector_risk: Option<u8>,
    pub ratios: FinancialRatios,
    pub rating: RatingResult,
    pub rated_at: DateTime<Utc>,
}

/// Flat row for CSV output
#[derive(Debug, Clone, Serialize)]
pub struct RatingRow<'a> {
    pub company_name: &'a str,
    pub country: &'a str,
    pub sector: &'a str,
    pub sector_risk: Option<u8>,
    pub sovereign: f64,
    pub financial_strength: f64,
    pub financier_behavior: f64,
    pub alt_data: f64,
    pub stress: f64,
    pub composite: f64,
    pub grade: Grade,
    pub pd_1y: f64,
    pub pd_3y: f64,
    pub debt_to_ebitda: f64,
    pub interest_coverage: f64,
    pub ocf_to_debt: f64,
    pub liquidity: f64,
    pub rated_at: String,
}

impl RatedCompany {
    pub fn to_row(&self) -> RatingRow<'_> {
        let r = &self.rating;
        RatingRow {
            company_name: &self.company_name,
            country: &self.country,
            sector: &self.sector,
            sector_risk: self.sector_risk,
            sovereign: r.sovereign,
            financial_strength: r.financial_strength,
            financier_behavior: r.financier_behavior,
            alt_data: r.alt_data,
            stress: r.stress,
            composite: r.composite,
            grade: r.grade,
            pd_1y: r.pd_1y,
            pd_3y: r.pd_3y,
            debt_to_ebitda: self.ratios.debt_to_ebitda,
            interest_coverage: self.ratios.interest_coverage,
            ocf_to_debt: self.ratios.ocf_to_debt,
            liquidity: self.ratios.liquidity,
            rated_at: self.rated_at.to_rfc3339(),
        }
    }
}
