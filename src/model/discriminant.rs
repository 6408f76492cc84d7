//! Two-species linear discriminant classification.

use super::{CoefficientTable, DiscriminantFunction};
use crate::core::{LogMeasurements, Species, Variant};
use serde::Serialize;
use tracing::debug;

/// Discriminant scores for both species hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscriminantScores {
    pub salt_marsh: f64,
    pub western: f64,
}

impl DiscriminantFunction {
    /// Evaluate against log-transformed measurements.
    pub fn score(&self, logs: &LogMeasurements) -> f64 {
        let diameter = logs.tail_diameter.unwrap_or(0.0);
        self.tail_length * logs.tail_length
            + self.body_length * logs.body_length
            + self.tail_diameter * diameter
            + self.intercept
    }
}

impl DiscriminantScores {
    pub fn compute(table: &CoefficientTable, logs: &LogMeasurements) -> Self {
        Self {
            salt_marsh: table.salt_marsh.score(logs),
            western: table.western.score(logs),
        }
    }

    /// Salt marsh score minus western score.
    pub fn margin(&self) -> f64 {
        self.salt_marsh - self.western
    }
}

/// Pick the species with the higher score.
///
/// Ties use exact floating-point equality with no tolerance: scores that
/// differ in the last bit are not a tie. Any comparison involving `NaN` falls
/// through to [`Species::Western`].
pub fn decide(scores: &DiscriminantScores) -> Species {
    if scores.salt_marsh > scores.western {
        Species::SaltMarsh
    } else if scores.salt_marsh == scores.western {
        Species::Inconclusive
    } else {
        Species::Western
    }
}

/// Classify with an explicit coefficient table.
pub fn classify_with(
    table: &CoefficientTable,
    logs: &LogMeasurements,
) -> (Species, DiscriminantScores) {
    let scores = DiscriminantScores::compute(table, logs);
    let species = decide(&scores);
    debug!(
        variant = %table.variant,
        salt_marsh = scores.salt_marsh,
        western = scores.western,
        ?species,
        "Discriminant scores computed"
    );
    (species, scores)
}

/// Classify log-transformed measurements with the built-in coefficients.
pub fn classify(variant: Variant, logs: &LogMeasurements) -> Species {
    classify_with(CoefficientTable::for_variant(variant), logs).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Measurements, Variant};
    use crate::model::{WITHOUT_DIAMETER, WITH_DIAMETER};

    fn logs(m: Measurements) -> LogMeasurements {
        LogMeasurements::from_measurements(m.variant(), &m).unwrap()
    }

    #[test]
    fn test_large_tail_classified_salt_marsh() {
        let logs = logs(Measurements::with_diameter(5.0, 120.0, 75.0));
        let (species, scores) = classify_with(&WITH_DIAMETER, &logs);
        assert_eq!(species, Species::SaltMarsh);
        assert!((scores.salt_marsh - 2363.9462179976).abs() < 1e-6);
        assert!((scores.western - 2343.0675181827).abs() < 1e-6);
    }

    #[test]
    fn test_typical_western_without_diameter() {
        let logs = logs(Measurements::without_diameter(65.0, 70.0));
        let (species, scores) = classify_with(&WITHOUT_DIAMETER, &logs);
        assert_eq!(species, Species::Western);
        assert!((scores.salt_marsh - 1725.9218842525).abs() < 1e-6);
        assert!((scores.western - 1731.1543056576).abs() < 1e-6);
    }

    #[test]
    fn test_classify_uses_variant_table() {
        let logs = logs(Measurements::with_diameter(1.5, 70.0, 65.0));
        assert_eq!(classify(Variant::WithDiameter, &logs), Species::Western);
    }

    #[test]
    fn test_decide_exact_tie_is_inconclusive() {
        let scores = DiscriminantScores {
            salt_marsh: 1750.25,
            western: 1750.25,
        };
        assert_eq!(decide(&scores), Species::Inconclusive);
    }

    #[test]
    fn test_decide_one_ulp_apart_is_not_a_tie() {
        // Exact equality is intentional; a tolerance would change outcomes.
        let western = 1750.25_f64;
        let salt_marsh = f64::from_bits(western.to_bits() + 1);
        let scores = DiscriminantScores {
            salt_marsh,
            western,
        };
        assert_eq!(decide(&scores), Species::SaltMarsh);

        let scores = DiscriminantScores {
            salt_marsh: western,
            western: salt_marsh,
        };
        assert_eq!(decide(&scores), Species::Western);
    }

    #[test]
    fn test_decide_nan_falls_through_to_western() {
        let scores = DiscriminantScores {
            salt_marsh: f64::NAN,
            western: 1.0,
        };
        assert_eq!(decide(&scores), Species::Western);
    }

    #[test]
    fn test_identical_functions_always_tie() {
        let table = CoefficientTable {
            western: WITHOUT_DIAMETER.salt_marsh,
            ..WITHOUT_DIAMETER
        };
        let logs = logs(Measurements::without_diameter(68.0, 71.0));
        assert_eq!(classify_with(&table, &logs).0, Species::Inconclusive);
    }

    #[test]
    fn test_built_in_length_model_has_exact_ties() {
        let logs = LogMeasurements::new(None, 1.8618823312090143, 1.8);
        let scores = DiscriminantScores::compute(&WITHOUT_DIAMETER, &logs);
        assert_eq!(scores.margin(), 0.0);
        assert_eq!(classify(Variant::WithoutDiameter, &logs), Species::Inconclusive);
    }

    #[test]
    fn test_margin_sign_matches_decision() {
        let logs = logs(Measurements::with_diameter(5.0, 120.0, 75.0));
        let scores = DiscriminantScores::compute(&WITH_DIAMETER, &logs);
        assert!(scores.margin() > 0.0);
    }
}
