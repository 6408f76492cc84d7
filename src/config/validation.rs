//! Validation with error accumulation for configuration.
//!
//! Uses stillwater's `Validation` so that every problem in a config file is
//! reported in one pass instead of stopping at the first.

use stillwater::{NonEmptyVec, Validation};

use super::core::{CertaintyConfig, SmhmConfig};
use crate::core::{Error, Result};

/// Validation result carrying every config problem found.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

fn from_errors(errors: Vec<String>) -> ConfigValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &SmhmConfig) -> ConfigValidation<()> {
    validate_certainty(config.certainty.as_ref())
}

/// Validate config with a fail-fast `Result` API; all messages are joined.
pub fn validate_config_result(config: &SmhmConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(Error::configuration(errors.into_vec().join("; "))),
    }
}

fn check_probability(name: &str, value: f64, errors: &mut Vec<String>) {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        errors.push(format!(
            "certainty.{} out of range: {} (must be 0.0-1.0)",
            name, value
        ));
    }
}

/// Validate the low-certainty band.
fn validate_certainty(certainty: Option<&CertaintyConfig>) -> ConfigValidation<()> {
    let Some(certainty) = certainty else {
        return Validation::Success(());
    };

    let mut errors = Vec::new();
    check_probability("low", certainty.low, &mut errors);
    check_probability("high", certainty.high, &mut errors);

    if certainty.low > certainty.high {
        errors.push(format!(
            "certainty.low ({}) must not exceed certainty.high ({})",
            certainty.low, certainty.high
        ));
    }

    from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(low: f64, high: f64) -> SmhmConfig {
        SmhmConfig {
            certainty: Some(CertaintyConfig { low, high }),
            ..SmhmConfig::default()
        }
    }

    fn errors_of(config: &SmhmConfig) -> Vec<String> {
        match validate_config(config) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.into_vec(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(errors_of(&SmhmConfig::default()).is_empty());
        assert!(errors_of(&SmhmConfig::documented_defaults()).is_empty());
    }

    #[test]
    fn test_degenerate_band_is_valid() {
        assert!(errors_of(&config_with(0.5, 0.5)).is_empty());
    }

    #[test]
    fn test_all_errors_are_accumulated() {
        let errors = errors_of(&config_with(1.5, -0.2));
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("certainty.low out of range"));
        assert!(errors[1].contains("certainty.high out of range"));
        assert!(errors[2].contains("must not exceed"));
    }

    #[test]
    fn test_nan_bound_is_rejected() {
        let errors = errors_of(&config_with(f64::NAN, 0.7));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_result_api_joins_messages() {
        let err = validate_config_result(&config_with(0.8, 0.2)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
