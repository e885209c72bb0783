use std::ops::RangeInclusive;

use fixed_map::Map;
use tracing::trace;

use crate::error::ConfigError;
use crate::linspace::Linspace;
use crate::membership::Shape;
use crate::outputs::SampledCurves;
use crate::terms::{Term, Terms};

/// Closed numeric interval sampled at a fixed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Universe {
    lo: f64,
    hi: f64,
    step: f64,
}

impl Universe {
    /// If the step is not provided, it defaults to 1.0.
    pub fn new(range: RangeInclusive<f64>, step: Option<f64>) -> Result<Self, ConfigError> {
        let lo = *range.start();
        let hi = *range.end();

        if lo > hi {
            return Err(ConfigError::InvertedUniverse { lo, hi });
        }

        let step = step.unwrap_or(1.);

        if !(step > 0.) {
            return Err(ConfigError::InvalidStep(step));
        }

        Ok(Self { lo, hi, step })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.lo, self.hi)
    }

    /// Sample points over the interval.
    pub fn points(&self) -> impl Iterator<Item = f64> {
        // floor is closest approx to what python does for the int()
        // conversion of the sample count
        let n = ((self.hi - self.lo) / self.step).floor() as usize + 1;

        Linspace::new(self.lo, self.hi, n)
    }
}

/// A named fuzzy partition of a numeric universe: one membership shape per
/// linguistic term. Immutable once built.
pub struct LinguisticVariable<T: Term> {
    name: &'static str,
    universe: Universe,
    terms: Map<T, Shape>,
}

impl<T: Term + Copy> LinguisticVariable<T> {
    pub fn new(
        name: &'static str,
        universe: Universe,
        terms: Terms<T>,
    ) -> Result<Self, ConfigError> {
        if terms.0.is_empty() {
            return Err(ConfigError::NoTerms { variable: name });
        }

        Ok(Self {
            name,
            universe,
            terms: terms.0,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn contains(&self, term: T) -> bool {
        self.terms.contains_key(term)
    }

    pub fn shape(&self, term: T) -> Option<Shape> {
        self.terms.get(term).copied()
    }

    /// Membership degree of `x` for every term of the variable.
    ///
    /// Out-of-universe inputs are not an error; shapes that do not reach
    /// `x` simply contribute a zero degree.
    pub fn fuzzify(&self, x: f64) -> Map<T, f64> {
        let mut degrees = Map::new();

        for (term, shape) in self.terms.iter() {
            degrees.insert(term, shape.evaluate(x));
        }

        trace!(variable = self.name, x, "fuzzified");

        degrees
    }

    /// All term shapes of the variable.
    pub fn terms(&self) -> impl Iterator<Item = (T, Shape)> + '_ {
        self.terms.iter().map(|(term, shape)| (term, *shape))
    }

    /// Sampled membership curve of every term, for plotting.
    pub fn sample_terms(&self) -> SampledCurves<T> {
        let xs: Vec<f64> = self.universe.points().collect();
        let mut curves = Map::new();

        for (term, shape) in self.terms.iter() {
            curves.insert(term, shape.sample(&self.universe));
        }

        SampledCurves::new(xs, curves)
    }
}

#[test]
fn test_universe_sampling() {
    let output = Universe::new(16. ..=30., None).unwrap();

    assert_eq!(output.points().count(), 15);
    assert_eq!(output.midpoint(), 23.);

    let temperature = Universe::new(0. ..=40., None).unwrap();

    assert_eq!(temperature.points().count(), 41);

    let halved = Universe::new(0. ..=40., Some(0.5)).unwrap();

    assert_eq!(halved.points().count(), 81);
}

#[test]
fn test_universe_rejects_bad_bounds() {
    assert_eq!(
        Universe::new(30. ..=16., None),
        Err(ConfigError::InvertedUniverse { lo: 30., hi: 16. })
    );
    assert_eq!(
        Universe::new(16. ..=30., Some(0.)),
        Err(ConfigError::InvalidStep(0.))
    );
}

#[test]
fn test_fuzzify_overlapping_terms() {
    use crate::terms::Temperature;

    let mut terms = Terms::new();

    terms.insert(Temperature::Cold, Shape::trapezoid(0., 0., 10., 20.).unwrap());
    terms.insert(Temperature::Medium, Shape::trapezoid(10., 20., 22., 30.).unwrap());
    terms.insert(Temperature::Hot, Shape::trapezoid(22., 30., 40., 40.).unwrap());

    let universe = Universe::new(0. ..=40., None).unwrap();
    let variable = LinguisticVariable::new("temperature", universe, terms).unwrap();
    let degrees = variable.fuzzify(15.);

    assert_eq!(degrees.get(Temperature::Cold), Some(&0.5));
    assert_eq!(degrees.get(Temperature::Medium), Some(&0.5));
    assert_eq!(degrees.get(Temperature::Hot), Some(&0.));

    // out of universe: all zero, no error
    let degrees = variable.fuzzify(-10.);

    assert!(degrees.values().all(|d| *d == 0.));
}

#[test]
fn test_variable_requires_terms() {
    use crate::terms::Temperature;

    let universe = Universe::new(0. ..=40., None).unwrap();
    let empty = Terms::<Temperature>::new();

    assert_eq!(
        LinguisticVariable::new("temperature", universe, empty).err(),
        Some(ConfigError::NoTerms { variable: "temperature" })
    );
}
