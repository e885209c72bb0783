use fixed_map::Map;

use crate::terms::{AcOutput, Occupancy, Temperature, Term};

/// Result of one inference call.
#[derive(Clone, Debug)]
pub struct InferenceResult {
    value: f64,
    aggregated: Option<Vec<f64>>,
}

impl InferenceResult {
    pub(crate) fn new(value: f64, aggregated: Option<Vec<f64>>) -> Self {
        Self { value, aggregated }
    }

    /// The crisp recommended set temperature.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Aggregated output membership over the sampled output universe, when
    /// the algorithm builds one. The rule engine does; the weighted
    /// average does not.
    pub fn aggregated(&self) -> Option<&[f64]> {
        self.aggregated.as_deref()
    }
}

/// Sampled membership curves of one variable, for plotting.
#[derive(Debug)]
pub struct SampledCurves<T: Term> {
    xs: Vec<f64>,
    curves: Map<T, Vec<f64>>,
}

// Not derivable: fixed_map's `Clone` is conditional on the key's map
// storage, which `T: Term` alone does not prove
impl<T: Term> Clone for SampledCurves<T>
where
    Map<T, Vec<f64>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            xs: self.xs.clone(),
            curves: self.curves.clone(),
        }
    }
}

impl<T: Term> SampledCurves<T> {
    pub(crate) fn new(xs: Vec<f64>, curves: Map<T, Vec<f64>>) -> Self {
        Self { xs, curves }
    }

    /// The sampled universe points every curve is aligned with.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn curve(&self, term: T) -> Option<&[f64]> {
        self.curves.get(term).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, &[f64])> + '_ {
        self.curves.iter().map(|(term, curve)| (term, curve.as_slice()))
    }
}

/// Curves of all three production variables, bundled for display.
#[derive(Debug)]
pub struct SystemCurves {
    pub temperature: SampledCurves<Temperature>,
    pub occupancy: SampledCurves<Occupancy>,
    pub output: SampledCurves<AcOutput>,
}

impl Clone for SystemCurves {
    fn clone(&self) -> Self {
        Self {
            temperature: self.temperature.clone(),
            occupancy: self.occupancy.clone(),
            output: self.output.clone(),
        }
    }
}
