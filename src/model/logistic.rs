//! Logistic probability estimate and certainty banding.

use super::{CoefficientTable, Factor, LogisticModel};
use crate::core::{Certainty, LogMeasurements, ReproductiveStatus, Sex, Variant};
use serde::{Deserialize, Serialize};
use stillwater::predicate::Predicate;
use tracing::debug;

/// Default inclusive lower bound of the low-certainty band.
pub const DEFAULT_LOW_CERTAINTY_MIN: f64 = 0.40;
/// Default inclusive upper bound of the low-certainty band.
pub const DEFAULT_LOW_CERTAINTY_MAX: f64 = 0.70;

/// Inclusive probability range reported as low certainty.
///
/// As a predicate it holds for probabilities inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CertaintyBand {
    pub low: f64,
    pub high: f64,
}

impl Default for CertaintyBand {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_CERTAINTY_MIN,
            high: DEFAULT_LOW_CERTAINTY_MAX,
        }
    }
}

impl Predicate<f64> for CertaintyBand {
    fn check(&self, probability: &f64) -> bool {
        *probability >= self.low && *probability <= self.high
    }
}

impl CertaintyBand {
    pub fn certainty(&self, probability: f64) -> Certainty {
        if self.check(&probability) {
            Certainty::Low
        } else {
            Certainty::Acceptable
        }
    }
}

/// Certainty of an unrounded probability under the default band.
pub fn certainty_for(probability: f64) -> Certainty {
    CertaintyBand::default().certainty(probability)
}

/// A probability with its display rounding and certainty flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityEstimate {
    /// Unrounded model output; the certainty flag is derived from this.
    pub value: f64,
    /// `value` rounded to two decimals; see [`format_hundredths`].
    pub rounded: f64,
    pub certainty: Certainty,
}

impl ProbabilityEstimate {
    pub fn assess(value: f64, band: &CertaintyBand) -> Self {
        Self {
            value,
            rounded: round_to_hundredths(value),
            certainty: band.certainty(value),
        }
    }

    /// Two-decimal text, e.g. `"0.41"` for 0.405.
    pub fn display(&self) -> String {
        format_hundredths(self.value)
    }

    pub fn message(&self) -> String {
        format!(
            "Estimated probability value: {}, {}",
            self.display(),
            self.certainty.description()
        )
    }
}

/// Two-decimal text of `value`, rounded from its exact binary value.
///
/// The only exact half-cent ties an `f64` can hold are odd multiples of 1/8
/// (0.125, 0.375, ...); those go up. Everything else is rounded to nearest by
/// the formatter, so 0.045 (stored just below the half) gives `"0.04"`.
pub fn format_hundredths(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", value)
}

/// [`format_hundredths`] as a number.
pub fn round_to_hundredths(value: f64) -> f64 {
    format_hundredths(value).parse().unwrap_or(value)
}

fn factor_value(
    factor: Factor,
    logs: &LogMeasurements,
    sex: Sex,
    repro: ReproductiveStatus,
) -> f64 {
    match factor {
        Factor::LogTailLength => logs.tail_length,
        Factor::LogBodyLength => logs.body_length,
        Factor::LogTailDiameter => logs.tail_diameter.unwrap_or(0.0),
        Factor::Sex => sex.indicator(),
        Factor::Reproductive => repro.indicator(),
    }
}

impl LogisticModel {
    /// The exponent `z` of `1 / (1 + e^(-z))`.
    pub fn linear_predictor(
        &self,
        logs: &LogMeasurements,
        sex: Sex,
        repro: ReproductiveStatus,
    ) -> f64 {
        self.terms.iter().fold(self.intercept, |z, term| {
            let product = term
                .factors
                .iter()
                .fold(term.coefficient, |acc, &f| acc * factor_value(f, logs, sex, repro));
            z + product
        })
    }

    pub fn probability(
        &self,
        logs: &LogMeasurements,
        sex: Sex,
        repro: ReproductiveStatus,
    ) -> f64 {
        let z = self.linear_predictor(logs, sex, repro);
        let probability = 1.0 / (1.0 + (-z).exp());
        debug!(z, probability, "Logistic probability computed");
        probability
    }
}

/// Probability from an explicit coefficient table.
pub fn estimate_probability_with(
    table: &CoefficientTable,
    logs: &LogMeasurements,
    sex: Sex,
    repro: ReproductiveStatus,
) -> f64 {
    table.logistic.probability(logs, sex, repro)
}

/// Probability from the built-in coefficients for `variant`.
pub fn estimate_probability(
    variant: Variant,
    logs: &LogMeasurements,
    sex: Sex,
    repro: ReproductiveStatus,
) -> f64 {
    estimate_probability_with(CoefficientTable::for_variant(variant), logs, sex, repro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Measurements;

    const TOLERANCE: f64 = 1e-9;

    fn logs(m: Measurements) -> LogMeasurements {
        LogMeasurements::from_measurements(m.variant(), &m).unwrap()
    }

    #[test]
    fn test_with_diameter_probability() {
        let l = logs(Measurements::with_diameter(1.5, 70.0, 65.0));
        let p = estimate_probability(
            Variant::WithDiameter,
            &l,
            Sex::Male,
            ReproductiveStatus::NonReproductive,
        );
        assert!((p - 0.8581472114351175).abs() < TOLERANCE);
        assert_eq!(certainty_for(p), Certainty::Acceptable);
    }

    #[test]
    fn test_without_diameter_probability_in_low_band() {
        let l = logs(Measurements::without_diameter(75.0, 70.0));
        let p = estimate_probability(
            Variant::WithoutDiameter,
            &l,
            Sex::Male,
            ReproductiveStatus::NonReproductive,
        );
        assert!((p - 0.6897705517565995).abs() < TOLERANCE);
        assert_eq!(certainty_for(p), Certainty::Low);
    }

    #[test]
    fn test_interaction_terms_use_indicators() {
        let l = logs(Measurements::without_diameter(60.0, 65.0));
        let z = crate::model::WITHOUT_DIAMETER.logistic.linear_predictor(
            &l,
            Sex::Female,
            ReproductiveStatus::Reproductive,
        );
        assert!((z - -9.246115372543002).abs() < 1e-9);
    }

    #[test]
    fn test_band_endpoints_are_inclusive() {
        assert_eq!(certainty_for(0.40), Certainty::Low);
        assert_eq!(certainty_for(0.70), Certainty::Low);
        assert_eq!(certainty_for(0.55), Certainty::Low);
        assert_eq!(certainty_for(0.3999999), Certainty::Acceptable);
        assert_eq!(certainty_for(0.7000001), Certainty::Acceptable);
    }

    #[test]
    fn test_certainty_uses_unrounded_value() {
        // Displays as "0.40" but sits below the band.
        let estimate = ProbabilityEstimate::assess(0.396, &CertaintyBand::default());
        assert_eq!(estimate.display(), "0.40");
        assert_eq!(estimate.certainty, Certainty::Acceptable);

        // Displays as "0.70" but sits above the band.
        let estimate = ProbabilityEstimate::assess(0.704, &CertaintyBand::default());
        assert_eq!(estimate.display(), "0.70");
        assert_eq!(estimate.certainty, Certainty::Acceptable);
    }

    #[test]
    fn test_display_rounding() {
        let band = CertaintyBand::default();
        assert_eq!(ProbabilityEstimate::assess(0.4049, &band).display(), "0.40");
        assert_eq!(ProbabilityEstimate::assess(0.405, &band).display(), "0.41");
        assert_eq!(ProbabilityEstimate::assess(0.125, &band).display(), "0.13");
        assert_eq!(ProbabilityEstimate::assess(0.9999999657, &band).display(), "1.00");
        assert_eq!(ProbabilityEstimate::assess(0.0000964, &band).display(), "0.00");
    }

    #[test]
    fn test_display_rounds_stored_value_not_scaled_value() {
        // Each literal is stored just below its half-cent boundary.
        assert_eq!(format_hundredths(0.045), "0.04");
        assert_eq!(format_hundredths(0.015), "0.01");
        assert_eq!(format_hundredths(0.155), "0.15");
        assert_eq!(round_to_hundredths(0.045), 0.04);
    }

    #[test]
    fn test_exact_half_cent_ties_round_up() {
        assert_eq!(format_hundredths(0.125), "0.13");
        assert_eq!(format_hundredths(0.375), "0.38");
        assert_eq!(format_hundredths(0.625), "0.63");
        assert_eq!(format_hundredths(0.875), "0.88");
        assert_eq!(format_hundredths(0.25), "0.25");
        assert_eq!(format_hundredths(0.0), "0.00");
        assert_eq!(format_hundredths(1.0), "1.00");
    }

    #[test]
    fn test_message_wording() {
        let band = CertaintyBand::default();
        assert_eq!(
            ProbabilityEstimate::assess(0.6897705517565995, &band).message(),
            "Estimated probability value: 0.69, low level of certainty"
        );
        assert_eq!(
            ProbabilityEstimate::assess(0.12396, &band).message(),
            "Estimated probability value: 0.12, acceptable level of certainty"
        );
    }

    #[test]
    fn test_custom_band() {
        let band = CertaintyBand {
            low: 0.2,
            high: 0.3,
        };
        assert_eq!(band.certainty(0.25), Certainty::Low);
        assert_eq!(band.certainty(0.5), Certainty::Acceptable);
    }

    #[test]
    fn test_extreme_predictor_saturates() {
        let l = LogMeasurements::new(None, -50.0, 0.0);
        let p = estimate_probability(
            Variant::WithoutDiameter,
            &l,
            Sex::Male,
            ReproductiveStatus::NonReproductive,
        );
        assert!((0.0..=1.0).contains(&p));
    }
}
