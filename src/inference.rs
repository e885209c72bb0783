use fixed_map::Map;
use tracing::debug;

use crate::error::ConfigError;
use crate::math;
use crate::outputs::{InferenceResult, SystemCurves};
use crate::rules::RuleTable;
use crate::terms::{AcOutput, Occupancy, Temperature};
use crate::variable::LinguisticVariable;

/// Selects which of the two inference styles [`AcController::infer`] runs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Clip each fired consequent shape at its aggregated firing strength,
    /// combine pointwise by maximum and defuzzify by centroid. The result
    /// is clamped to the output universe; when nothing fires it falls back
    /// to the universe midpoint.
    Mamdani,
    /// Weighted average of the consequent shape sums over all nine
    /// antecedent pairs. The result is not clamped, and a zero denominator
    /// yields the (then also zero) numerator; callers should treat a zero
    /// here as "no signal" rather than a valid setpoint.
    WeightedAverage,
}

/// The complete inference system: the two input variables, one output
/// variable per engine and the rule table.
///
/// Construction validates the whole configuration once; afterwards the
/// controller is immutable and every call is a pure function of its two
/// crisp inputs, so shared references may be used from any number of
/// callers.
pub struct AcController {
    temperature: LinguisticVariable<Temperature>,
    occupancy: LinguisticVariable<Occupancy>,
    // The two engines were tuned against different output shapes, so each
    // carries its own output variable.
    mamdani_output: LinguisticVariable<AcOutput>,
    weighted_output: LinguisticVariable<AcOutput>,
    rules: RuleTable,
}

impl AcController {
    /// Fails if any rule references a term its variable does not define.
    pub fn new(
        temperature: LinguisticVariable<Temperature>,
        occupancy: LinguisticVariable<Occupancy>,
        mamdani_output: LinguisticVariable<AcOutput>,
        weighted_output: LinguisticVariable<AcOutput>,
        rules: RuleTable,
    ) -> Result<Self, ConfigError> {
        for rule in rules.iter() {
            if !temperature.contains(rule.temperature) {
                return Err(ConfigError::UndefinedTerm {
                    variable: temperature.name(),
                    term: rule.temperature.name(),
                });
            }
            if !occupancy.contains(rule.occupancy) {
                return Err(ConfigError::UndefinedTerm {
                    variable: occupancy.name(),
                    term: rule.occupancy.name(),
                });
            }
            for output in [&mamdani_output, &weighted_output] {
                if !output.contains(rule.consequent) {
                    return Err(ConfigError::UndefinedTerm {
                        variable: output.name(),
                        term: rule.consequent.name(),
                    });
                }
            }
        }

        Ok(Self {
            temperature,
            occupancy,
            mamdani_output,
            weighted_output,
            rules,
        })
    }

    /// Crisp recommended set temperature for the two crisp inputs.
    pub fn infer(&self, algorithm: Algorithm, temperature: f64, occupancy: f64) -> f64 {
        self.infer_detailed(algorithm, temperature, occupancy).value()
    }

    /// Like [`AcController::infer`], but also returns the aggregated output
    /// curve when the algorithm produces one.
    pub fn infer_detailed(
        &self,
        algorithm: Algorithm,
        temperature: f64,
        occupancy: f64,
    ) -> InferenceResult {
        match algorithm {
            Algorithm::Mamdani => self.eval_mamdani(temperature, occupancy),
            Algorithm::WeightedAverage => self.eval_weighted(temperature, occupancy),
        }
    }

    /// Sampled membership curves of all three variables; the output curves
    /// are those of the selected algorithm.
    pub fn sample_curves(&self, algorithm: Algorithm) -> SystemCurves {
        let output = match algorithm {
            Algorithm::Mamdani => &self.mamdani_output,
            Algorithm::WeightedAverage => &self.weighted_output,
        };

        SystemCurves {
            temperature: self.temperature.sample_terms(),
            occupancy: self.occupancy.sample_terms(),
            output: output.sample_terms(),
        }
    }

    fn eval_mamdani(&self, temperature: f64, occupancy: f64) -> InferenceResult {
        let temperature_degrees = self.temperature.fuzzify(temperature);
        let occupancy_degrees = self.occupancy.fuzzify(occupancy);

        // Maximum firing strength per consequent term across all rules
        let mut strengths: Map<AcOutput, f64> = Map::new();

        for rule in self.rules.iter() {
            let strength = f64::min(
                temperature_degrees.get(rule.temperature).copied().unwrap_or(0.),
                occupancy_degrees.get(rule.occupancy).copied().unwrap_or(0.),
            );
            let aggregated = strengths.get(rule.consequent).copied().unwrap_or(0.);

            strengths.insert(rule.consequent, f64::max(aggregated, strength));
        }

        // Clip each consequent shape at its strength and combine the clipped
        // shapes pointwise by maximum
        let universe = self.mamdani_output.universe();
        let xs: Vec<f64> = universe.points().collect();
        let mut aggregated = vec![0.; xs.len()];

        for (term, strength) in strengths.iter() {
            let shape = self
                .mamdani_output
                .shape(term)
                .expect("consequent terms are validated at construction");

            for (point, x) in aggregated.iter_mut().zip(xs.iter()) {
                *point = f64::max(*point, strength.min(shape.evaluate(*x)));
            }
        }

        let value = match math::centroid(&xs, &aggregated) {
            Some(value) => universe.clamp(value),
            // nothing fired; fall back to the middle of the output range
            None => universe.midpoint(),
        };

        debug!(temperature, occupancy, value, "mamdani inference");

        InferenceResult::new(value, Some(aggregated))
    }

    fn eval_weighted(&self, temperature: f64, occupancy: f64) -> InferenceResult {
        let temperature_degrees = self.temperature.fuzzify(temperature);
        let occupancy_degrees = self.occupancy.fuzzify(occupancy);

        let universe = self.weighted_output.universe();
        let xs: Vec<f64> = universe.points().collect();

        // Per consequent term: Σ x·μ(x) and Σ μ(x) over the sampled universe
        let mut sums: Map<AcOutput, (f64, f64)> = Map::new();

        for (term, shape) in self.weighted_output.terms() {
            let mu = shape.sample(&universe);

            sums.insert(term, math::weighted_sums(&xs, &mu));
        }

        // Every antecedent pair contributes, weighted by its firing strength
        let mut numerator = 0.;
        let mut denominator = 0.;

        for (temperature_term, temperature_degree) in temperature_degrees.iter() {
            for (occupancy_term, occupancy_degree) in occupancy_degrees.iter() {
                let strength = f64::min(*temperature_degree, *occupancy_degree);
                let consequent = self.rules.consequent(temperature_term, occupancy_term);
                let (weighted, area) = sums
                    .get(consequent)
                    .copied()
                    .expect("consequent terms are validated at construction");

                numerator += strength * weighted;
                denominator += strength * area;
            }
        }

        // When the denominator is zero the numerator is zero as well, so the
        // degenerate no-signal result is 0 rather than a division error. No
        // clamping is applied to this engine's result.
        let value = if denominator != 0. {
            numerator / denominator
        } else {
            numerator
        };

        debug!(temperature, occupancy, value, "weighted-average inference");

        InferenceResult::new(value, None)
    }
}

#[cfg(test)]
fn controller() -> AcController {
    crate::config::production().unwrap()
}

#[test]
fn test_cold_empty_room_raises_setpoint() {
    // Only cold & empty fires, at full strength: the aggregate is the
    // unclipped high triangle (24, 28, 30), centroid 82/3 over the unit grid
    let value = controller().infer(Algorithm::Mamdani, 5., 1.);

    assert!((value - 82. / 3.).abs() < 1e-9);
    assert!(value > 26.);
}

#[test]
fn test_hot_crowded_room_lowers_setpoint() {
    // Only hot & crowded fires: aggregate is the low triangle (16, 20, 24),
    // symmetric around 20
    let value = controller().infer(Algorithm::Mamdani, 35., 8.);

    assert!((value - 20.).abs() < 1e-9);
}

#[test]
fn test_moderate_conditions_blend_low_and_medium() {
    // temperature 26 splits medium/hot at 0.5 each, occupancy 4 is fully
    // medium, so the medium and low output shapes are both clipped at 0.5;
    // the combined aggregate sums to 4.25 with weighted sum 90.25
    let value = controller().infer(Algorithm::Mamdani, 26., 4.);

    assert!((value - 90.25 / 4.25).abs() < 1e-9);
    assert!(value > 20. && value < 24.);
}

#[test]
fn test_boundary_fires_multiple_terms() {
    let controller = controller();
    let result = controller.infer_detailed(Algorithm::Mamdani, 15., 2.5);

    // Four rules fire at 0.5, feeding both the medium and high output
    // terms; the plateau of the max-combined aggregate spans both shapes
    let aggregated = result.aggregated().unwrap();
    let plateau = aggregated.iter().filter(|mu| **mu == 0.5).count();

    assert_eq!(plateau, 7);
    assert!((result.value() - 26.).abs() < 1e-9);
}

#[test]
fn test_term_transition_is_continuous() {
    // At exactly (20, 3) the cold and empty degrees have just reached zero,
    // leaving the single medium & medium rule at full strength
    let value = controller().infer(Algorithm::Mamdani, 20., 3.);

    assert!((value - 24.).abs() < 1e-9);
}

#[test]
fn test_mamdani_zero_firing_falls_back_to_midpoint() {
    // Both inputs lie outside every term's support
    let value = controller().infer(Algorithm::Mamdani, -5., 20.);

    assert_eq!(value, 23.);
}

#[test]
fn test_weighted_average_single_pair() {
    // Only hot & crowded carries weight; its consequent is the narrower
    // low triangle (16, 18, 22) of the weighted-average tuning
    let value = controller().infer(Algorithm::WeightedAverage, 35., 8.);

    assert!((value - 56. / 3.).abs() < 1e-9);
}

#[test]
fn test_weighted_average_cold_empty() {
    let value = controller().infer(Algorithm::WeightedAverage, 5., 1.);

    // centroid of the high triangle (22, 26, 30) over the unit grid
    assert!((value - 26.).abs() < 1e-9);
}

#[test]
fn test_weighted_average_zero_denominator_returns_zero() {
    let value = controller().infer(Algorithm::WeightedAverage, -5., 20.);

    // documented no-signal result, deliberately not a valid setpoint
    assert_eq!(value, 0.);
}

#[test]
fn test_sample_curves_align_with_universes() {
    let controller = controller();
    let curves = controller.sample_curves(Algorithm::Mamdani);

    assert_eq!(curves.temperature.xs().len(), 41);
    assert_eq!(curves.occupancy.xs().len(), 11);
    assert_eq!(curves.output.xs().len(), 15);

    let low = curves.output.curve(AcOutput::Low).unwrap();

    assert_eq!(low.len(), 15);
    // peak of the (16, 20, 24) triangle sits at x = 20
    assert_eq!(low[4], 1.);

    // the weighted-average tuning peaks at x = 18 instead
    let curves = controller.sample_curves(Algorithm::WeightedAverage);
    let low = curves.output.curve(AcOutput::Low).unwrap();

    assert_eq!(low[2], 1.);
}

#[test]
fn test_curves_clone_for_display() {
    // the presentation shell keeps its own copy of the curves
    let curves = controller().sample_curves(Algorithm::WeightedAverage);
    let copy = curves.clone();

    assert_eq!(copy.output.xs(), curves.output.xs());
    assert_eq!(
        copy.output.curve(AcOutput::Medium),
        curves.output.curve(AcOutput::Medium)
    );
}

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn mamdani_output_stays_in_universe(
            temperature in -50.0..100.0f64,
            occupancy in -10.0..40.0f64,
        ) {
            let value = controller().infer(Algorithm::Mamdani, temperature, occupancy);

            prop_assert!((16.0..=30.0).contains(&value));
        }

        #[test]
        fn degrees_stay_in_unit_interval(x in -100.0..100.0f64) {
            let controller = controller();

            for (_, degree) in controller.temperature.fuzzify(x).iter() {
                prop_assert!((0.0..=1.0).contains(degree));
            }
            for (_, degree) in controller.occupancy.fuzzify(x).iter() {
                prop_assert!((0.0..=1.0).contains(degree));
            }
        }

        #[test]
        fn firing_strength_bounded_by_antecedents(
            temperature in 0.0..40.0f64,
            occupancy in 0.0..10.0f64,
        ) {
            let controller = controller();
            let temperature_degrees = controller.temperature.fuzzify(temperature);
            let occupancy_degrees = controller.occupancy.fuzzify(occupancy);

            for rule in controller.rules.iter() {
                let t = temperature_degrees.get(rule.temperature).copied().unwrap_or(0.);
                let o = occupancy_degrees.get(rule.occupancy).copied().unwrap_or(0.);
                let strength = f64::min(t, o);

                prop_assert!(strength <= t && strength <= o);
            }
        }

        #[test]
        fn inference_is_deterministic(
            temperature in -50.0..100.0f64,
            occupancy in -10.0..40.0f64,
        ) {
            let controller = controller();

            for algorithm in [Algorithm::Mamdani, Algorithm::WeightedAverage] {
                let first = controller.infer(algorithm, temperature, occupancy);
                let second = controller.infer(algorithm, temperature, occupancy);

                prop_assert_eq!(first, second);
            }
        }
    }
}
