//! End-to-end checks of validate -> classify -> estimate through the public API.

use pretty_assertions::assert_eq;
use smhm_id::model::{classify, classify_with, WITHOUT_DIAMETER};
use smhm_id::{
    run, run_with_diameter, run_without_diameter, Certainty, CoefficientTable, Field,
    LogMeasurements, Measurements, Outcome, ReproductiveStatus, Sex, Species, Variant,
};

#[test]
fn test_with_diameter_reference_specimen() {
    // log10 inputs: 0.69897, 2.07918, 1.87506
    let id = run_with_diameter(&Measurements::with_diameter(5.0, 120.0, 75.0)).unwrap();

    assert_eq!(id.variant, Variant::WithDiameter);
    assert_eq!(id.species, Species::SaltMarsh);
    assert!((id.scores.salt_marsh - 2363.946217998).abs() < 1e-6);
    assert!((id.scores.western - 2343.067518183).abs() < 1e-6);
    assert!(id.probability.value > 0.0 && id.probability.value < 1.0);
    assert!((id.probability.value - 0.999_999_965_718).abs() < 1e-9);
    assert_eq!(id.probability.display(), "1.00");
    assert_eq!(id.probability.certainty, Certainty::Acceptable);
}

#[test]
fn test_female_reproductive_specimen_with_diameter() {
    let m = Measurements::with_diameter(1.2, 70.0, 70.0)
        .sex(Sex::Female)
        .reproductive_status(ReproductiveStatus::Reproductive);
    let id = run(&m).unwrap();

    assert_eq!(id.species, Species::Western);
    assert!((id.probability.value - 8.257_680_72e-10).abs() < 1e-15);
    assert_eq!(id.probability.display(), "0.00");
    assert_eq!(id.probability.certainty, Certainty::Acceptable);
}

#[test]
fn test_without_diameter_low_certainty() {
    let id = run_without_diameter(&Measurements::without_diameter(75.0, 70.0)).unwrap();

    assert_eq!(id.variant, Variant::WithoutDiameter);
    assert_eq!(id.species, Species::Western);
    assert_eq!(id.probability.display(), "0.69");
    assert_eq!(id.probability.certainty, Certainty::Low);
    assert_eq!(
        id.probability.message(),
        "Estimated probability value: 0.69, low level of certainty"
    );
}

#[test]
fn test_exact_tie_is_inconclusive() {
    // Both rows identical: every input scores an exact tie.
    let table = CoefficientTable {
        western: WITHOUT_DIAMETER.salt_marsh,
        ..WITHOUT_DIAMETER
    };
    for (tl, bl) in [(60.0_f64, 65.0_f64), (75.0, 70.0), (90.0, 80.0)] {
        let logs = LogMeasurements::new(None, tl.log10(), bl.log10());
        let (species, scores) = classify_with(&table, &logs);
        assert_eq!(scores.salt_marsh.to_bits(), scores.western.to_bits());
        assert_eq!(species, Species::Inconclusive);
    }
}

#[test]
fn test_exact_tie_with_built_in_coefficients() {
    // Solves 75.789 * lTL - 33.729 * lBL = 80.398, nudged to a bit-exact tie.
    let logs = LogMeasurements::new(None, 1.8618823312090143, 1.8);
    let (species, scores) = classify_with(&WITHOUT_DIAMETER, &logs);

    assert_eq!(scores.salt_marsh.to_bits(), scores.western.to_bits());
    assert_eq!(species, Species::Inconclusive);
    assert_eq!(
        classify(Variant::WithoutDiameter, &logs),
        Species::Inconclusive
    );
}

#[test]
fn test_invalid_tail_length_stops_pipeline() {
    let m = Measurements::with_diameter(1.5, 0.0, 65.0);
    let err = run(&m).unwrap_err();
    assert_eq!(err.field, Field::TailLength);

    let outcome = Outcome::from(&run(&m));
    assert!(!outcome.valid);
    assert_eq!(outcome.invalid_field, Some(Field::TailLength));
    assert_eq!(outcome.species, None);
    assert_eq!(outcome.probability, None);
    assert_eq!(outcome.certainty, None);
}

#[test]
fn test_diameter_reported_before_lengths() {
    let m = Measurements {
        tail_diameter: Some(-2.0),
        tail_length: None,
        body_length: Some(0.0),
        ..Measurements::default()
    };
    assert_eq!(run(&m).unwrap_err().field, Field::TailDiameter);
}

#[test]
fn test_outcome_json_shape() {
    let outcome = Outcome::from(&run(&Measurements::without_diameter(65.0, 70.0)));
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["valid"], true);
    assert_eq!(json["variant"], "without-diameter");
    assert_eq!(json["species"], "western");
    assert_eq!(json["certainty"], "acceptable");
    assert_eq!(json["probability_display"], "0.00");
    assert!(json.get("invalid_field").is_none());
}
