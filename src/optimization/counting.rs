//! Evaluation boundary shared by the solvers.
//!
//! [`CountedProblem`] wraps the caller's objective and gradient for the
//! duration of one `optimize` call. Every evaluation is counted and its
//! output validated (finite value; gradient of the right length with finite
//! entries), so the numerical core can assume well-formed inputs.
use std::cell::Cell;

use crate::optimization::{
    errors::OptResult,
    traits::{Gradient, Objective},
    types::{COST_COUNT, FnEvalMap, GRADIENT_COUNT},
    validation::{validate_grad, validate_value},
    vector::Vector,
};

/// Counting, validating view over an objective/gradient pair.
///
/// Owned by a single `optimize` call; the counters use `Cell` and the type is
/// therefore not `Sync`.
pub struct CountedProblem<'a, V> {
    objective: &'a dyn Objective<V>,
    gradient: &'a dyn Gradient<V>,
    dim: usize,
    cost_count: Cell<u64>,
    gradient_count: Cell<u64>,
}

impl<'a, V: Vector> CountedProblem<'a, V> {
    /// Wrap `objective`/`gradient` for points of dimension `dim`.
    pub fn new(objective: &'a dyn Objective<V>, gradient: &'a dyn Gradient<V>, dim: usize) -> Self {
        Self { objective, gradient, dim, cost_count: Cell::new(0), gradient_count: Cell::new(0) }
    }

    pub fn cost_count(&self) -> u64 {
        self.cost_count.get()
    }

    pub fn gradient_count(&self) -> u64 {
        self.gradient_count.get()
    }

    /// Snapshot of the counters keyed like argmin's `get_func_counts`.
    pub fn fn_evals(&self) -> FnEvalMap {
        let mut map = FnEvalMap::new();
        map.insert(COST_COUNT.to_string(), self.cost_count());
        map.insert(GRADIENT_COUNT.to_string(), self.gradient_count());
        map
    }
}

impl<V: Vector> Objective<V> for CountedProblem<'_, V> {
    fn value(&self, x: &V) -> OptResult<f64> {
        self.cost_count.set(self.cost_count.get() + 1);
        let value = self.objective.value(x)?;
        validate_value(value)?;
        Ok(value)
    }
}

impl<V: Vector> Gradient<V> for CountedProblem<'_, V> {
    fn gradient(&self, x: &V) -> OptResult<V> {
        self.gradient_count.set(self.gradient_count.get() + 1);
        let grad = self.gradient.gradient(x)?;
        validate_grad(&grad, self.dim)?;
        Ok(grad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{errors::OptError, types::Point};
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Counter increments on objective and gradient evaluation.
    // - Validation of values and gradients at the evaluation boundary.
    //
    // They intentionally DO NOT cover:
    // - Solver-level bookkeeping of the counters (see solver tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that each evaluation bumps exactly its own counter.
    //
    // Given
    // -----
    // - `f(x) = xᵀx`, `∇f(x) = 2x` wrapped for dimension 2.
    //
    // Expect
    // ------
    // - Two value calls and one gradient call give counts 2 and 1.
    fn counters_track_each_capability_separately() {
        // Arrange
        let f = |x: &Point| x.dot(x);
        let g = |x: &Point| x * 2.0;
        let problem: CountedProblem<'_, Point> = CountedProblem::new(&f, &g, 2);
        let x = array![1.0, 2.0];

        // Act
        let v1 = problem.value(&x).expect("finite value");
        let _ = problem.value(&x).expect("finite value");
        let grad = problem.gradient(&x).expect("valid gradient");

        // Assert
        assert_eq!(v1, 5.0);
        assert_eq!(grad, array![2.0, 4.0]);
        assert_eq!(problem.cost_count(), 2);
        assert_eq!(problem.gradient_count(), 1);
        assert_eq!(problem.fn_evals().get(COST_COUNT), Some(&2));
        assert_eq!(problem.fn_evals().get(GRADIENT_COUNT), Some(&1));
    }

    #[test]
    // Purpose
    // -------
    // Ensure contract violations by the caller's capabilities become errors.
    //
    // Given
    // -----
    // - An objective returning `NaN` and a gradient of the wrong length.
    //
    // Expect
    // ------
    // - `NonFiniteCost` and `GradientDimMismatch` respectively.
    fn contract_violations_surface_as_errors() {
        // Arrange
        let f = |_: &Point| f64::NAN;
        let g = |_: &Point| array![1.0];
        let problem: CountedProblem<'_, Point> = CountedProblem::new(&f, &g, 2);
        let x = array![0.0, 0.0];

        // Act
        let value_err = problem.value(&x).expect_err("NaN must be rejected");
        let grad_err = problem.gradient(&x).expect_err("wrong length must be rejected");

        // Assert
        assert!(matches!(value_err, OptError::NonFiniteCost { .. }));
        assert_eq!(grad_err, OptError::GradientDimMismatch { expected: 2, found: 1 });
    }
}
