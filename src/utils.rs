use ndarray::Array1;
use std::ops::RangeInclusive;

/// A scalar function to minimize, along with its derivative.
#[derive(Clone, Debug)]
pub struct ScalarProblem<V, D>
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub value: V,
    pub derivative: D,
}

impl<V, D> ScalarProblem<V, D>
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub fn new(value: V, derivative: D) -> ScalarProblem<V, D> {
        ScalarProblem { value, derivative }
    }

    pub fn value(&self, x: f64) -> f64 {
        (self.value)(x)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    /// Evaluate the function at `n` evenly spaced points of `domain`,
    /// both endpoints included.
    pub fn sample(&self, domain: RangeInclusive<f64>, n: usize) -> Vec<(f64, f64)> {
        Array1::linspace(*domain.start(), *domain.end(), n)
            .iter()
            .map(|&x| (x, self.value(x)))
            .collect()
    }
}

pub type Quadratic = ScalarProblem<fn(f64) -> f64, fn(f64) -> f64>;

/// f(x) = x^2
pub fn square(x: f64) -> f64 {
    x * x
}

/// f'(x) = 2x
pub fn square_derivative(x: f64) -> f64 {
    2.0 * x
}

pub fn quadratic() -> Quadratic {
    ScalarProblem::new(square as fn(f64) -> f64, square_derivative as fn(f64) -> f64)
}
