use std::iter::Sum;

use num::Float;

/// `Σ x·μ(x)` and `Σ μ(x)` over a sampled membership curve.
pub(crate) fn weighted_sums<F: Float + Sum>(xs: &[F], mu: &[F]) -> (F, F) {
    let weighted = xs
        .iter()
        .copied()
        .zip(mu.iter().copied())
        .map(|(x, m)| x * m)
        .sum();
    let area = mu.iter().copied().sum();

    (weighted, area)
}

/// Discrete centroid of a sampled membership curve, or `None` when the
/// curve is entirely zero.
pub(crate) fn centroid<F: Float + Sum>(xs: &[F], mu: &[F]) -> Option<F> {
    let (weighted, area) = weighted_sums(xs, mu);

    if area == F::zero() {
        None
    } else {
        Some(weighted / area)
    }
}

#[test]
fn test_centroid_of_symmetric_curve() {
    let xs = [16., 17., 18., 19., 20., 21., 22., 23., 24.];
    let mu = [0., 0.25, 0.5, 0.75, 1., 0.75, 0.5, 0.25, 0.];

    assert_eq!(centroid(&xs, &mu), Some(20.));
}

#[test]
fn test_centroid_of_empty_curve_is_none() {
    let xs = [0., 1., 2.];
    let mu = [0., 0., 0.];

    assert_eq!(centroid::<f64>(&xs, &mu), None);
}
