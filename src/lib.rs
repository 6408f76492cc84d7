//! Discriminant-function identification of the salt marsh harvest mouse
//! (*Reithrodontomys raviventris halicoetes*) and the western harvest mouse
//! (*Reithrodontomys megalotis*) from tail and body measurements.
//!
//! ```rust
//! use smhm_id::{run, Certainty, Measurements, Species};
//!
//! let id = run(&Measurements::with_diameter(5.0, 120.0, 75.0)).unwrap();
//! assert_eq!(id.species, Species::SaltMarsh);
//! assert_eq!(id.probability.display(), "1.00");
//! assert_eq!(id.probability.certainty, Certainty::Acceptable);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Certainty, Error, Field, InvalidFieldError, LogMeasurements, Measurements,
    ReproductiveStatus, Result, Sex, Species, StyleTag, Variant,
};

pub use crate::model::{
    certainty_for, classify, decide, estimate_probability, CertaintyBand, CoefficientTable,
    DiscriminantScores, ProbabilityEstimate,
};

pub use crate::pipeline::{
    run, run_variant, run_with_diameter, run_without_diameter, Identification, Outcome,
};

pub use crate::validation::{parse_measurement, validate, validate_measurements};
