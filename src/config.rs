//! The fixed production tables and the process-wide controller.
//!
//! Everything here is constructed once and shared read-only; inference
//! calls never mutate it.

use std::sync::LazyLock;

use crate::error::ConfigError;
use crate::inference::AcController;
use crate::membership::Shape;
use crate::rules::{RuleTable, RULES};
use crate::terms::{AcOutput, Occupancy, Temperature, Terms};
use crate::variable::{LinguisticVariable, Universe};

/// Builds a controller from the production tuning.
pub(crate) fn production() -> Result<AcController, ConfigError> {
    let mut temperature_terms = Terms::new();

    temperature_terms.insert(Temperature::Cold, Shape::trapezoid(0., 0., 10., 20.)?);
    temperature_terms.insert(Temperature::Medium, Shape::trapezoid(10., 20., 22., 30.)?);
    temperature_terms.insert(Temperature::Hot, Shape::trapezoid(22., 30., 40., 40.)?);

    let temperature = LinguisticVariable::new(
        "temperature",
        Universe::new(0. ..=40., None)?,
        temperature_terms,
    )?;

    let mut occupancy_terms = Terms::new();

    occupancy_terms.insert(Occupancy::Empty, Shape::trapezoid(0., 0., 2., 3.)?);
    occupancy_terms.insert(Occupancy::Medium, Shape::trapezoid(2., 3., 5., 6.)?);
    occupancy_terms.insert(Occupancy::Crowded, Shape::trapezoid(5., 6., 10., 10.)?);

    let occupancy = LinguisticVariable::new(
        "occupancy",
        Universe::new(0. ..=10., None)?,
        occupancy_terms,
    )?;

    let mut mamdani_terms = Terms::new();

    mamdani_terms.insert(AcOutput::Low, Shape::triangle(16., 20., 24.)?);
    mamdani_terms.insert(AcOutput::Medium, Shape::triangle(22., 24., 26.)?);
    mamdani_terms.insert(AcOutput::High, Shape::triangle(24., 28., 30.)?);

    let mamdani_output = LinguisticVariable::new(
        "ac_output",
        Universe::new(16. ..=30., None)?,
        mamdani_terms,
    )?;

    // The weighted-average engine was tuned against narrower shapes; the
    // two configurations stay separate
    let mut weighted_terms = Terms::new();

    weighted_terms.insert(AcOutput::Low, Shape::triangle(16., 18., 22.)?);
    weighted_terms.insert(AcOutput::Medium, Shape::triangle(20., 22., 24.)?);
    weighted_terms.insert(AcOutput::High, Shape::triangle(22., 26., 30.)?);

    let weighted_output = LinguisticVariable::new(
        "ac_output",
        Universe::new(16. ..=30., None)?,
        weighted_terms,
    )?;

    let rules = RuleTable::from_rules(&RULES)?;

    AcController::new(temperature, occupancy, mamdani_output, weighted_output, rules)
}

static CONTROLLER: LazyLock<AcController> =
    LazyLock::new(|| production().expect("production fuzzy tables are well formed"));

pub(crate) fn controller() -> &'static AcController {
    &CONTROLLER
}

#[test]
fn test_production_configuration_is_valid() {
    assert!(production().is_ok());
}
