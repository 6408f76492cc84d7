//! Identification pipeline: validate, classify, then estimate probability.
//!
//! Validation runs first and short-circuits; nothing is log-transformed or
//! scored for invalid input.

use crate::core::{
    Certainty, Field, InvalidFieldError, LogMeasurements, Measurements, ReproductiveStatus, Sex,
    Species, Variant,
};
use crate::model::{
    classify_with, CertaintyBand, CoefficientTable, DiscriminantScores, ProbabilityEstimate,
};
use serde::Serialize;
use tracing::{debug, info_span};

/// Everything computed for one valid specimen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Identification {
    pub variant: Variant,
    pub species: Species,
    pub scores: DiscriminantScores,
    pub probability: ProbabilityEstimate,
    pub sex: Sex,
    pub reproductive_status: ReproductiveStatus,
}

/// Run the pipeline for an explicit variant and certainty band.
pub fn run_variant(
    variant: Variant,
    measurements: &Measurements,
    band: &CertaintyBand,
) -> Result<Identification, InvalidFieldError> {
    let _span = info_span!("identify", variant = %variant).entered();

    let logs = LogMeasurements::from_measurements(variant, measurements).inspect_err(|err| {
        debug!(field = %err.field, "Measurement rejected");
    })?;

    let table = CoefficientTable::for_variant(variant);
    let (species, scores) = classify_with(table, &logs);
    let value = table.logistic.probability(
        &logs,
        measurements.sex,
        measurements.reproductive_status,
    );

    Ok(Identification {
        variant,
        species,
        scores,
        probability: ProbabilityEstimate::assess(value, band),
        sex: measurements.sex,
        reproductive_status: measurements.reproductive_status,
    })
}

/// Run the pipeline chosen by which measurements were supplied.
pub fn run(measurements: &Measurements) -> Result<Identification, InvalidFieldError> {
    run_variant(measurements.variant(), measurements, &CertaintyBand::default())
}

/// Diameter pipeline; a blank diameter is reported as invalid.
pub fn run_with_diameter(measurements: &Measurements) -> Result<Identification, InvalidFieldError> {
    run_variant(Variant::WithDiameter, measurements, &CertaintyBand::default())
}

/// Length-only pipeline; any supplied diameter is ignored.
pub fn run_without_diameter(
    measurements: &Measurements,
) -> Result<Identification, InvalidFieldError> {
    run_variant(Variant::WithoutDiameter, measurements, &CertaintyBand::default())
}

/// Flat, serializable view of a pipeline result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<DiscriminantScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certainty: Option<Certainty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_field: Option<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&Identification> for Outcome {
    fn from(id: &Identification) -> Self {
        Self {
            valid: true,
            variant: Some(id.variant),
            species: Some(id.species),
            species_label: Some(id.species.to_string()),
            scores: Some(id.scores),
            probability: Some(id.probability.value),
            probability_display: Some(id.probability.display()),
            certainty: Some(id.probability.certainty),
            invalid_field: None,
            message: Some(id.probability.message()),
        }
    }
}

impl From<&InvalidFieldError> for Outcome {
    fn from(err: &InvalidFieldError) -> Self {
        Self {
            valid: false,
            variant: None,
            species: None,
            species_label: None,
            scores: None,
            probability: None,
            probability_display: None,
            certainty: None,
            invalid_field: Some(err.field),
            message: Some(err.to_string()),
        }
    }
}

impl From<&Result<Identification, InvalidFieldError>> for Outcome {
    fn from(result: &Result<Identification, InvalidFieldError>) -> Self {
        match result {
            Ok(id) => id.into(),
            Err(err) => err.into(),
        }
    }
}
