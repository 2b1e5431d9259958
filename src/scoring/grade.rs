//! Letter grade classification of the composite score

use serde::{Deserialize, Serialize};
use std::fmt;

/// SACRM letter grades, declared lowest to highest so that `Ord` follows
/// credit quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "BB-")]
    BbMinus,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "BB+")]
    BbPlus,
    #[serde(rename = "BBB-")]
    BbbMinus,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "BBB+")]
    BbbPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Lower bound of each grade, highest first. Anything below the last
/// threshold is `BMinus`.
const THRESHOLDS: [(f64, Grade); 13] = [
    (90.0, Grade::Aaa),
    (85.0, Grade::Aa),
    (80.0, Grade::APlus),
    (75.0, Grade::A),
    (72.0, Grade::AMinus),
    (70.0, Grade::BbbPlus),
    (68.0, Grade::Bbb),
    (65.0, Grade::BbbMinus),
    (62.0, Grade::BbPlus),
    (60.0, Grade::Bb),
    (55.0, Grade::BbMinus),
    (50.0, Grade::BPlus),
    (45.0, Grade::B),
];

impl Grade {
    /// First threshold the score meets wins
    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::BMinus)
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Aaa => "AAA",
            Grade::Aa => "AA",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BbbPlus => "BBB+",
            Grade::Bbb => "BBB",
            Grade::BbbMinus => "BBB-",
            Grade::BbPlus => "BB+",
            Grade::Bb => "BB",
            Grade::BbMinus => "BB-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Grade::from_score(100.0), Grade::Aaa);
        assert_eq!(Grade::from_score(90.0), Grade::Aaa);
        assert_eq!(Grade::from_score(89.9), Grade::Aa);
        assert_eq!(Grade::from_score(81.5), Grade::APlus);
        assert_eq!(Grade::from_score(75.0), Grade::A);
        assert_eq!(Grade::from_score(72.0), Grade::AMinus);
        assert_eq!(Grade::from_score(71.9), Grade::BbbPlus);
        assert_eq!(Grade::from_score(68.0), Grade::Bbb);
        assert_eq!(Grade::from_score(65.0), Grade::BbbMinus);
        assert_eq!(Grade::from_score(62.0), Grade::BbPlus);
        assert_eq!(Grade::from_score(60.0), Grade::Bb);
        assert_eq!(Grade::from_score(55.0), Grade::BbMinus);
        assert_eq!(Grade::from_score(50.0), Grade::BPlus);
        assert_eq!(Grade::from_score(45.0), Grade::B);
        assert_eq!(Grade::from_score(44.9), Grade::BMinus);
    }

    #[test]
    fn test_total_over_reals() {
        assert_eq!(Grade::from_score(-1000.0), Grade::BMinus);
        assert_eq!(Grade::from_score(1e9), Grade::Aaa);
        assert_eq!(Grade::from_score(f64::NAN), Grade::BMinus);
    }

    #[test]
    fn test_monotonic_in_score() {
        let mut previous = Grade::from_score(-10.0);
        for step in 0..=1200 {
            let score = -10.0 + step as f64 * 0.1;
            let grade = Grade::from_score(score);
            assert!(grade >= previous, "grade fell at score {}", score);
            previous = grade;
        }
        assert_eq!(previous, Grade::Aaa);
    }

    #[test]
    fn test_labels_and_serde() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::BbbMinus.label(), "BBB-");
        assert_eq!(serde_json::to_string(&Grade::BbPlus).unwrap(), "\"BB+\"");
        let grade: Grade = serde_json::from_str("\"AAA\"").unwrap();
        assert_eq!(grade, Grade::Aaa);
    }
}
