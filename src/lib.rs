//! Fuzzy inference of a recommended air-conditioner set temperature.
//!
//! Two crisp inputs, the ambient temperature and the occupant count, are
//! fuzzified against fixed linguistic variables, run through a nine-rule
//! firing table and defuzzified into one crisp setpoint. Two engines are
//! provided and selected per call with [`Algorithm`]: a Mamdani-style rule
//! engine with centroid defuzzification, and a Tsukamoto-style weighted
//! average over all antecedent pairs. The two engines carry separately
//! tuned output shapes.
//!
//! ```
//! use fuzzy_ac::{infer, Algorithm};
//!
//! // A cold, empty room wants a warm setpoint.
//! let setpoint = infer(Algorithm::Mamdani, 5.0, 1.0);
//! assert!(setpoint > 26.0);
//! ```

mod config;
mod error;
mod inference;
mod linspace;
mod math;
mod membership;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use error::ConfigError;
pub use inference::{AcController, Algorithm};
pub use membership::Shape;
pub use outputs::{InferenceResult, SampledCurves, SystemCurves};
pub use rules::{Rule, RuleTable, RULES};
pub use terms::{AcOutput, Occupancy, Temperature, Term, Terms};
pub use variable::{LinguisticVariable, Universe};

/// Runs one inference against the shared production controller.
pub fn infer(algorithm: Algorithm, temperature: f64, occupancy: f64) -> f64 {
    config::controller().infer(algorithm, temperature, occupancy)
}

/// Sampled membership curves of the production variables, for diagnostic
/// plotting. The output curves are those of the selected algorithm.
pub fn sample_curves(algorithm: Algorithm) -> SystemCurves {
    config::controller().sample_curves(algorithm)
}
