use thiserror::Error;

use crate::terms::{Occupancy, Temperature};

/// A malformed variable or rule definition, caught at construction time.
///
/// Inference itself never fails; every runtime branch has a defined
/// numeric result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{shape} parameters must be non-decreasing, got {params:?}")]
    UnorderedShape {
        shape: &'static str,
        params: Vec<f64>,
    },
    #[error("universe range is inverted: {lo} > {hi}")]
    InvertedUniverse { lo: f64, hi: f64 },
    #[error("universe step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("variable `{variable}` defines no terms")]
    NoTerms { variable: &'static str },
    #[error("duplicate rule for ({temperature:?}, {occupancy:?})")]
    DuplicateRule {
        temperature: Temperature,
        occupancy: Occupancy,
    },
    #[error("no rule covers ({temperature:?}, {occupancy:?})")]
    MissingRule {
        temperature: Temperature,
        occupancy: Occupancy,
    },
    #[error("rule references term `{term}` not defined on variable `{variable}`")]
    UndefinedTerm {
        variable: &'static str,
        term: &'static str,
    },
}
