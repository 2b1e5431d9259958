//! Rating engine: profile -> sub-scores -> composite -> {grade, PD}

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use super::{
    alt_data, behavior, financial, pd, sovereign, stress, FinancialRatios, Grade, RatedCompany,
    RatingResult, SubScores,
};
use crate::profile::FinancialProfile;
use crate::reference::ReferenceTables;

/// Borrows the process-wide reference tables; holds no other state, so a
/// single engine can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct RatingEngine<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> RatingEngine<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// The five sub-scores for a profile
    pub fn sub_scores(&self, profile: &FinancialProfile) -> SubScores {
        let fss = financial::score(profile);
        SubScores {
            sovereign: f64::from(sovereign::score(&self.tables.countries, &profile.country)),
            financial_strength: fss,
            financier_behavior: behavior::score(profile),
            alt_data: alt_data::score(profile),
            stress: stress::score(profile, fss),
        }
    }

    /// Full rating for a single profile
    pub fn rate(&self, profile: &FinancialProfile) -> RatingResult {
        let scores = self.sub_scores(profile);
        let composite = scores.composite();
        let grade = Grade::from_score(composite);
        let pd = pd::estimate(composite);

        log::debug!(
            "{}: CRS={} FSS={} OCBS={} BRS={} SSS={:.2} -> {} ({})",
            profile.company_name,
            scores.sovereign,
            scores.financial_strength,
            scores.financier_behavior,
            scores.alt_data,
            scores.stress,
            composite,
            grade
        );

        RatingResult {
            sovereign: scores.sovereign,
            financial_strength: scores.financial_strength,
            financier_behavior: scores.financier_behavior,
            alt_data: scores.alt_data,
            stress: scores.stress,
            composite,
            grade,
            pd_1y: pd.one_year,
            pd_3y: pd.three_year,
        }
    }

    /// Rating plus reporting context for a single profile
    pub fn rate_company(&self, profile: &FinancialProfile) -> RatedCompany {
        self.envelope(profile, Utc::now())
    }

    /// Rate each profile independently in parallel; output order matches input
    pub fn rate_all(&self, profiles: &[FinancialProfile]) -> Vec<RatedCompany> {
        let rated_at = Utc::now();
        profiles
            .par_iter()
            .map(|profile| self.envelope(profile, rated_at))
            .collect()
    }

    fn envelope(&self, profile: &FinancialProfile, rated_at: DateTime<Utc>) -> RatedCompany {
        if self.tables.countries.get(&profile.country).is_none() {
            log::warn!(
                "{}: country {:?} not in sovereign table, using default score",
                profile.company_name,
                profile.country
            );
        }
        RatedCompany {
            company_name: profile.company_name.clone(),
            country: profile.country.clone(),
            sector: profile.sector.clone(),
            sector_risk: self.tables.sector_risk(&profile.sector),
            ratios: FinancialRatios::from_profile(profile),
            rating: self.rate(profile),
            rated_at,
        }
    }
}
