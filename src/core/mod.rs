pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use errors::{Error, InvalidFieldError, Result};

/// Which measurement set is available for a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    WithDiameter,
    WithoutDiameter,
}

impl Variant {
    /// Required numeric fields, in the order they are validated.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Self::WithDiameter => &[Field::TailDiameter, Field::TailLength, Field::BodyLength],
            Self::WithoutDiameter => &[Field::TailLength, Field::BodyLength],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WithDiameter => "with tail diameter",
            Self::WithoutDiameter => "without tail diameter",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A numeric morphometric field. Declaration order is validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    TailDiameter,
    TailLength,
    BodyLength,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::TailDiameter => "tail diameter",
            Self::TailLength => "tail length",
            Self::BodyLength => "body length",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    /// Regression indicator: male = 0, female = 1.
    pub fn indicator(self) -> f64 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReproductiveStatus {
    #[default]
    NonReproductive,
    Reproductive,
}

impl ReproductiveStatus {
    /// Regression indicator: non-reproductive = 0, reproductive = 1.
    pub fn indicator(self) -> f64 {
        match self {
            Self::NonReproductive => 0.0,
            Self::Reproductive => 1.0,
        }
    }
}

/// Raw measurements as entered, before validation.
///
/// `None` means the value was left blank. A value that could not be read as a
/// number is carried as `NaN` so that validation rejects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub tail_diameter: Option<f64>,
    pub tail_length: Option<f64>,
    pub body_length: Option<f64>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub reproductive_status: ReproductiveStatus,
}

impl Measurements {
    pub fn with_diameter(tail_diameter: f64, tail_length: f64, body_length: f64) -> Self {
        Self {
            tail_diameter: Some(tail_diameter),
            tail_length: Some(tail_length),
            body_length: Some(body_length),
            ..Self::default()
        }
    }

    pub fn without_diameter(tail_length: f64, body_length: f64) -> Self {
        Self {
            tail_length: Some(tail_length),
            body_length: Some(body_length),
            ..Self::default()
        }
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn reproductive_status(mut self, status: ReproductiveStatus) -> Self {
        self.reproductive_status = status;
        self
    }

    /// The pipeline implied by which values were supplied.
    pub fn variant(&self) -> Variant {
        if self.tail_diameter.is_some() {
            Variant::WithDiameter
        } else {
            Variant::WithoutDiameter
        }
    }

    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::TailDiameter => self.tail_diameter,
            Field::TailLength => self.tail_length,
            Field::BodyLength => self.body_length,
        }
    }
}

/// Base-10 logarithms of validated measurements.
///
/// An absent tail diameter contributes nothing to any score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogMeasurements {
    pub tail_diameter: Option<f64>,
    pub tail_length: f64,
    pub body_length: f64,
}

impl LogMeasurements {
    /// Build from values that are already in log10 space.
    pub fn new(tail_diameter: Option<f64>, tail_length: f64, body_length: f64) -> Self {
        Self {
            tail_diameter,
            tail_length,
            body_length,
        }
    }

    /// Validate `measurements` for `variant` and take log10 of each field.
    ///
    /// Nothing is transformed unless every required field passes, so the
    /// logarithm is never taken of a non-positive value.
    pub fn from_measurements(
        variant: Variant,
        measurements: &Measurements,
    ) -> std::result::Result<Self, InvalidFieldError> {
        crate::validation::validate_measurements(variant, measurements)?;

        let log10 = |field: Field| measurements.value(field).map(f64::log10);
        Ok(Self {
            tail_diameter: match variant {
                Variant::WithDiameter => log10(Field::TailDiameter),
                Variant::WithoutDiameter => None,
            },
            tail_length: log10(Field::TailLength).unwrap_or_default(),
            body_length: log10(Field::BodyLength).unwrap_or_default(),
        })
    }
}

/// Rendering hint for a classification: green for SMHM, blue for WHM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    GreenBold,
    BlueBold,
    Plain,
}

/// Outcome of the discriminant comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Salt Marsh Harvest Mouse (SMHM)
    SaltMarsh,
    /// Western Harvest Mouse (WHM)
    Western,
    Inconclusive,
}

impl Species {
    pub fn label(self) -> &'static str {
        match self {
            Self::SaltMarsh => "Salt Marsh Harvest Mouse",
            Self::Western => "Western Harvest Mouse",
            Self::Inconclusive => "Inconclusive",
        }
    }

    pub fn scientific_name(self) -> Option<&'static str> {
        match self {
            Self::SaltMarsh => Some("Reithrodontomys raviventris halicoetes"),
            Self::Western => Some("Reithrodontomys megalotis"),
            Self::Inconclusive => None,
        }
    }

    pub fn style(self) -> StyleTag {
        match self {
            Self::SaltMarsh => StyleTag::GreenBold,
            Self::Western => StyleTag::BlueBold,
            Self::Inconclusive => StyleTag::Plain,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scientific_name() {
            Some(name) => write!(f, "{}, {}", self.label(), name),
            None => f.write_str(self.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    Low,
    Acceptable,
}

impl Certainty {
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "low level of certainty",
            Self::Acceptable => "acceptable level of certainty",
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Acceptable => f.write_str("acceptable"),
        }
    }
}
