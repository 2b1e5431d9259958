//! Probability of default from the composite score
//!
//! A fixed exponential curve, not a fitted model:
//! `pd_1y = max(0.1, 50 * e^(-0.05 * score))` in percent.

use serde::{Deserialize, Serialize};

use super::round_to;

const PD_SCALE: f64 = 50.0;
const PD_DECAY: f64 = 0.05;
/// Lowest 1-year PD the curve can report (percent)
pub const PD_FLOOR: f64 = 0.1;
/// 3-year PD as a multiple of 1-year PD
pub const THREE_YEAR_MULTIPLIER: f64 = 2.3;

/// Default probabilities in percent, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultProbability {
    pub one_year: f64,
    pub three_year: f64,
}

/// Unrounded, floored 1-year PD
pub fn one_year(score: f64) -> f64 {
    (PD_SCALE * (-PD_DECAY * score).exp()).max(PD_FLOOR)
}

/// The 3-year PD is derived from the already-rounded 1-year PD
pub fn estimate(score: f64) -> DefaultProbability {
    let one_year = round_to(one_year(score), 2);
    DefaultProbability {
        one_year,
        three_year: round_to(one_year * THREE_YEAR_MULTIPLIER, 2),
    }
}

/// Sample `(score, pd_1y)` pairs at evenly spaced scores over `[from, to]`
pub fn curve(from: f64, to: f64, points: usize) -> Vec<(f64, f64)> {
    if points < 2 {
        return vec![(from, one_year(from))];
    }
    let step = (to - from) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let score = from + step * i as f64;
            (score, one_year(score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_score() {
        let pd = estimate(81.5);
        assert_eq!(pd.one_year, 0.85);
        // 0.85 x 2.3 = 1.955 in decimal, just below it in binary
        assert_eq!(pd.three_year, 1.95);
    }

    #[test]
    fn test_zero_score() {
        let pd = estimate(0.0);
        assert_eq!(pd.one_year, 50.0);
        assert_eq!(pd.three_year, 115.0);
    }

    #[test]
    fn test_floor() {
        // 50e^(-0.05s) < 0.1 once s > ~124.3
        assert_eq!(one_year(130.0), PD_FLOOR);
        let pd = estimate(200.0);
        assert_eq!(pd.one_year, 0.1);
        assert_eq!(pd.three_year, 0.23);
    }

    #[test]
    fn test_three_year_relation() {
        for step in 0..=200 {
            let pd = estimate(step as f64 * 0.5);
            assert_eq!(pd.three_year, round_to(pd.one_year * THREE_YEAR_MULTIPLIER, 2));
            assert!(pd.one_year >= PD_FLOOR);
        }
    }

    #[test]
    fn test_strictly_decreasing_above_floor() {
        let mut previous = one_year(0.0);
        for step in 1..=100 {
            let current = one_year(step as f64);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_curve_sampling() {
        let points = curve(40.0, 95.0, 50);
        assert_eq!(points.len(), 50);
        assert_abs_diff_eq!(points[0].0, 40.0);
        assert_abs_diff_eq!(points[49].0, 95.0, epsilon = 1e-9);
        assert_abs_diff_eq!(points[0].1, 50.0 * (-2.0f64).exp(), epsilon = 1e-12);
        assert!(points.windows(2).all(|w| w[1].1 < w[0].1));

        assert_eq!(curve(60.0, 90.0, 1), vec![(60.0, one_year(60.0))]);
    }
}
