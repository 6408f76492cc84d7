//! Fixed model coefficients, one table per measurement variant.
//!
//! Both pipelines share the same evaluation code; only the table differs.
//! Values come from an offline discriminant and logistic regression fit and
//! must not be altered.

pub mod discriminant;
pub mod logistic;

use crate::core::Variant;
use serde::Serialize;

pub use discriminant::{classify, classify_with, decide, DiscriminantScores};
pub use logistic::{
    certainty_for, estimate_probability, estimate_probability_with, CertaintyBand,
    ProbabilityEstimate,
};

/// Coefficients of one species' linear discriminant function.
///
/// Terms are summed in field order (tail length, body length, tail diameter)
/// and the intercept is added last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscriminantFunction {
    pub tail_length: f64,
    pub body_length: f64,
    pub tail_diameter: f64,
    pub intercept: f64,
}

/// An input to a logistic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    LogTailLength,
    LogBodyLength,
    LogTailDiameter,
    Sex,
    Reproductive,
}

impl Factor {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::LogTailLength => "log10(tail length)",
            Self::LogBodyLength => "log10(body length)",
            Self::LogTailDiameter => "log10(tail diameter)",
            Self::Sex => "sex",
            Self::Reproductive => "repro",
        }
    }
}

/// `coefficient * factors[0] * factors[1] ...`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogisticTerm {
    pub coefficient: f64,
    pub factors: &'static [Factor],
}

/// Logistic exponent: intercept plus terms, accumulated in listed order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogisticModel {
    pub intercept: f64,
    pub terms: &'static [LogisticTerm],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientTable {
    pub variant: Variant,
    pub salt_marsh: DiscriminantFunction,
    pub western: DiscriminantFunction,
    pub logistic: LogisticModel,
}

const fn term(coefficient: f64, factors: &'static [Factor]) -> LogisticTerm {
    LogisticTerm {
        coefficient,
        factors,
    }
}

use Factor::{LogBodyLength, LogTailDiameter, LogTailLength, Reproductive, Sex};

pub const WITH_DIAMETER: CoefficientTable = CoefficientTable {
    variant: Variant::WithDiameter,
    salt_marsh: DiscriminantFunction {
        tail_length: 1658.63,
        body_length: 1251.43,
        tail_diameter: -1356.23,
        intercept: -2483.19,
    },
    western: DiscriminantFunction {
        tail_length: 1594.17,
        body_length: 1290.70,
        tail_diameter: -1381.15,
        intercept: -2426.26,
    },
    logistic: LogisticModel {
        intercept: -176.6804749,
        terms: &[
            term(134.8900487, &[LogTailLength]),
            term(-64.98908781, &[LogTailLength, Sex]),
            term(-36.24677334, &[LogBodyLength]),
            term(-12.94430661, &[LogBodyLength, Reproductive]),
            term(-26.64893326, &[LogTailDiameter]),
            term(36.88839651, &[LogTailDiameter, Sex]),
            term(72.58639553, &[LogTailDiameter, Reproductive]),
            term(110.9957523, &[Sex]),
        ],
    },
};

pub const WITHOUT_DIAMETER: CoefficientTable = CoefficientTable {
    variant: Variant::WithoutDiameter,
    salt_marsh: DiscriminantFunction {
        tail_length: 1022.109,
        body_length: 898.421,
        tail_diameter: 0.0,
        intercept: -1784.748,
    },
    western: DiscriminantFunction {
        tail_length: 946.32,
        body_length: 932.15,
        tail_diameter: 0.0,
        intercept: -1704.35,
    },
    logistic: LogisticModel {
        intercept: -131.3871789,
        terms: &[
            term(107.8989853, &[LogTailLength]),
            term(-38.00935259, &[LogBodyLength]),
            term(85.46575696, &[Sex]),
            term(-86.8588366, &[Reproductive]),
            term(-45.67206005, &[LogTailLength, Sex]),
            term(45.99885482, &[LogTailLength, Reproductive]),
        ],
    },
};

impl CoefficientTable {
    pub fn for_variant(variant: Variant) -> &'static CoefficientTable {
        match variant {
            Variant::WithDiameter => &WITH_DIAMETER,
            Variant::WithoutDiameter => &WITHOUT_DIAMETER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_keyed_by_variant() {
        for variant in [Variant::WithDiameter, Variant::WithoutDiameter] {
            assert_eq!(CoefficientTable::for_variant(variant).variant, variant);
        }
    }

    #[test]
    fn test_without_diameter_table_ignores_diameter() {
        assert_eq!(WITHOUT_DIAMETER.salt_marsh.tail_diameter, 0.0);
        assert_eq!(WITHOUT_DIAMETER.western.tail_diameter, 0.0);
        assert!(WITHOUT_DIAMETER
            .logistic
            .terms
            .iter()
            .all(|t| !t.factors.contains(&LogTailDiameter)));
    }

    #[test]
    fn test_term_counts() {
        assert_eq!(WITH_DIAMETER.logistic.terms.len(), 8);
        assert_eq!(WITHOUT_DIAMETER.logistic.terms.len(), 6);
    }
}
