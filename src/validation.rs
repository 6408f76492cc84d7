//! Measurement validation.
//!
//! Every required field must be present, finite and strictly positive before
//! the log transform runs. Fields are checked in declaration order and the
//! first failure is reported; later fields are not inspected.

use crate::core::{Field, InvalidFieldError, Measurements, Variant};
use stillwater::predicate::Predicate;

/// Predicate for a usable morphometric value.
///
/// Blank (`None`), `NaN`, infinite, zero and negative values all fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveMeasurement;

impl Predicate<f64> for PositiveMeasurement {
    fn check(&self, value: &f64) -> bool {
        value.is_finite() && *value > 0.0
    }
}

impl Predicate<Option<f64>> for PositiveMeasurement {
    fn check(&self, value: &Option<f64>) -> bool {
        value
            .as_ref()
            .is_some_and(|v| Predicate::<f64>::check(self, v))
    }
}

/// Validate `(field, value)` pairs in the order given.
pub fn validate(fields: &[(Field, Option<f64>)]) -> Result<(), InvalidFieldError> {
    let predicate = PositiveMeasurement;
    match fields.iter().find(|(_, value)| !predicate.check(value)) {
        Some((field, _)) => Err(InvalidFieldError::new(*field)),
        None => Ok(()),
    }
}

/// Validate the fields `variant` requires from `measurements`.
pub fn validate_measurements(
    variant: Variant,
    measurements: &Measurements,
) -> Result<(), InvalidFieldError> {
    let fields: Vec<(Field, Option<f64>)> = variant
        .required_fields()
        .iter()
        .map(|&field| (field, measurements.value(field)))
        .collect();
    validate(&fields)
}

/// Parse text typed into a measurement box.
///
/// Blank input is `None`. Anything else that is not a number becomes `NaN`,
/// which [`validate`] rejects, so "blank" and "zero" never get confused.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}
