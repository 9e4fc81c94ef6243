//! Gradient descent on a scalar function, as a StreamingIterator of iterates.

use super::*;
use crate::config::RunConfig;
use crate::utils::ScalarProblem;
use log::{debug, info};

/// Why a descent stopped. `steps` counts derivative evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The step taken on iteration `steps` moved less than the tolerance,
    /// and was not kept.
    Converged { steps: usize },
    IterationCap { steps: usize },
}

/// Descent driven by the derivative alone; the function value is never
/// needed to take a step.
#[derive(Debug, Clone)]
pub struct DerivativeDescent<D>
where
    D: Fn(f64) -> f64,
{
    pub derivative: D,
    pub step_size: f64,
    pub tolerance: f64,
    pub max_iter: usize,
    pub x: f64,
    steps: usize,
    started: bool,
    termination: Option<Termination>,
}

impl<D> DerivativeDescent<D>
where
    D: Fn(f64) -> f64,
{
    pub fn new(
        derivative: D,
        step_size: f64,
        x_0: f64,
        max_iter: usize,
        tolerance: f64,
    ) -> DerivativeDescent<D> {
        DerivativeDescent {
            derivative,
            step_size,
            tolerance,
            max_iter,
            x: x_0,
            steps: 0,
            started: false,
            termination: None,
        }
    }

    /// Number of accepted steps so far.
    pub fn steps(&self) -> usize {
        match self.termination {
            Some(Termination::Converged { steps }) => steps - 1,
            _ => self.steps,
        }
    }

    /// `None` until the stream is exhausted.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }
}

impl<D> StreamingIterator for DerivativeDescent<D>
where
    D: Fn(f64) -> f64,
{
    type Item = DerivativeDescent<D>;

    /// The first call exposes the starting point; every later call takes
    /// one step.
    fn advance(&mut self) {
        if !self.started {
            self.started = true;
            return;
        }
        if self.termination.is_some() {
            return;
        }
        if self.steps >= self.max_iter {
            self.termination = Some(Termination::IterationCap { steps: self.steps });
            return;
        }
        self.steps += 1;
        let next = self.x - self.step_size * (self.derivative)(self.x);
        if (next - self.x).abs() < self.tolerance {
            self.termination = Some(Termination::Converged { steps: self.steps });
            return;
        }
        self.x = next;
    }

    fn get(&self) -> Option<&Self::Item> {
        if self.started && self.termination.is_none() {
            Some(self)
        } else {
            None
        }
    }
}

/// The full history of a run and the reason it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Descent {
    pub history: Vec<f64>,
    pub termination: Termination,
}

/// Run the descent to completion on `problem`, logging each kept iterate.
pub fn descend<V, D>(problem: &ScalarProblem<V, D>, config: &RunConfig) -> Descent
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut dd = DerivativeDescent::new(
        &problem.derivative,
        config.learning_rate,
        config.start_point,
        config.n_iter,
        config.tolerance,
    );
    // The cap is user supplied and usually far above the steps taken.
    let mut history = Vec::new();
    {
        let mut logged = tee(&mut dd, |curr: &DerivativeDescent<_>| {
            debug!(
                "x_{} = {:.6}; f(x_{}) = {:.6}",
                curr.steps,
                curr.x,
                curr.steps,
                problem.value(curr.x)
            )
        });
        while let Some(curr) = logged.next() {
            history.push(curr.x);
        }
    }
    let termination = dd
        .termination()
        .expect("an exhausted descent always records why it stopped");
    info!("{:?} with {} positions in history", termination, history.len());
    Descent {
        history,
        termination,
    }
}

/// The position history of gradient descent from `start_point`.
pub fn gradient_descent<D>(
    derivative: D,
    start_point: f64,
    learning_rate: f64,
    n_iter: usize,
    tolerance: f64,
) -> Vec<f64>
where
    D: Fn(f64) -> f64,
{
    let mut dd = DerivativeDescent::new(derivative, learning_rate, start_point, n_iter, tolerance);
    let mut history = Vec::new();
    while let Some(curr) = dd.next() {
        history.push(curr.x);
    }
    history
}
