use crate::error::ConfigError;
use crate::variable::Universe;

/// Shape of one fuzzy set over a numeric universe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// `a ≤ b ≤ c ≤ d`: zero outside `[a, d]`, rising over `a..b`, flat at
    /// one over `b..c`, falling over `c..d`.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
    /// `a ≤ b ≤ c`: the degenerate trapezoid with a single peak at `b`.
    Triangle { a: f64, b: f64, c: f64 },
}

impl Shape {
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self, ConfigError> {
        if !(a <= b && b <= c && c <= d) {
            return Err(ConfigError::UnorderedShape {
                shape: "trapezoid",
                params: vec![a, b, c, d],
            });
        }

        Ok(Self::Trapezoid { a, b, c, d })
    }

    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        if !(a <= b && b <= c) {
            return Err(ConfigError::UnorderedShape {
                shape: "triangle",
                params: vec![a, b, c],
            });
        }

        Ok(Self::Triangle { a, b, c })
    }

    /// Membership degree at `x`, always within `[0, 1]`.
    ///
    /// A zero-width rising or falling segment acts as a vertical step, so
    /// shapes like `trapezoid(0, 0, 10, 20)` are full members at their left
    /// edge and no division by zero can occur.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (a, b, c, d) = self.corners();

        if x < a || x > d {
            0.
        } else if x < b {
            // only reachable when a < b, so the segment has width
            (x - a) / (b - a)
        } else if x <= c {
            1.
        } else {
            // only reachable when c < d
            (d - x) / (d - c)
        }
    }

    /// One degree per point of `universe`, used for plotting.
    pub fn sample(&self, universe: &Universe) -> Vec<f64> {
        universe.points().map(|x| self.evaluate(x)).collect()
    }

    fn corners(&self) -> (f64, f64, f64, f64) {
        match *self {
            Shape::Trapezoid { a, b, c, d } => (a, b, c, d),
            Shape::Triangle { a, b, c } => (a, b, b, c),
        }
    }
}

#[test]
fn test_trapezoid_evaluate() {
    let cold = Shape::trapezoid(0., 0., 10., 20.).unwrap();

    // vertical step at the left edge
    assert_eq!(cold.evaluate(0.), 1.);
    assert_eq!(cold.evaluate(5.), 1.);
    assert_eq!(cold.evaluate(10.), 1.);
    assert_eq!(cold.evaluate(15.), 0.5);
    assert_eq!(cold.evaluate(20.), 0.);
    assert_eq!(cold.evaluate(-1.), 0.);
    assert_eq!(cold.evaluate(25.), 0.);

    let medium = Shape::trapezoid(10., 20., 22., 30.).unwrap();

    assert_eq!(medium.evaluate(15.), 0.5);
    assert_eq!(medium.evaluate(21.), 1.);
    assert_eq!(medium.evaluate(26.), 0.5);
}

#[test]
fn test_triangle_evaluate() {
    let low = Shape::triangle(16., 20., 24.).unwrap();

    assert_eq!(low.evaluate(16.), 0.);
    assert_eq!(low.evaluate(18.), 0.5);
    assert_eq!(low.evaluate(20.), 1.);
    assert_eq!(low.evaluate(24.), 0.);

    // fully degenerate spike
    let spike = Shape::triangle(5., 5., 5.).unwrap();

    assert_eq!(spike.evaluate(5.), 1.);
    assert_eq!(spike.evaluate(5.1), 0.);
}

#[test]
fn test_unordered_params_rejected() {
    assert!(matches!(
        Shape::trapezoid(1., 0., 2., 3.),
        Err(ConfigError::UnorderedShape { shape: "trapezoid", .. })
    ));
    assert!(matches!(
        Shape::triangle(3., 2., 4.),
        Err(ConfigError::UnorderedShape { shape: "triangle", .. })
    ));
}
