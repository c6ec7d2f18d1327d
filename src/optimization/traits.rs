//! Public capability contracts for unconstrained minimization.
//!
//! - [`Objective`]: `x ↦ f(x)`.
//! - [`Gradient`]: `x ↦ ∇f(x)`.
//! - [`Optimizer`]: `optimize(x0, objective, gradient) → OptimOutcome`.
//! - [`OptimOutcome`]: normalized result record returned by every optimizer.
//!
//! Plain closures are capabilities too: any `Fn(&V) -> f64` is an
//! [`Objective`] and any `Fn(&V) -> V` is a [`Gradient`]. Implement the traits
//! directly when evaluation can fail and should report an
//! [`OptError`](crate::optimization::errors::OptError).
use crate::optimization::{
    errors::OptResult,
    types::FnEvalMap,
    validation::{validate_point, validate_value},
    vector::Vector,
};
use argmin::core::{TerminationReason, TerminationStatus};

/// Scalar objective `f(x)` to be minimized.
///
/// Implementations must be deterministic: identical inputs give identical
/// outputs. Return an error (for example
/// [`OptError::EvaluationFailed`](crate::optimization::errors::OptError::EvaluationFailed)) for
/// inputs outside the objective's domain instead of panicking.
pub trait Objective<V> {
    fn value(&self, x: &V) -> OptResult<f64>;
}

/// Gradient `∇f(x)` of an [`Objective`].
///
/// The returned vector must have the same length as `x`; the solvers reject
/// mismatches with
/// [`OptError::GradientDimMismatch`](crate::optimization::errors::OptError::GradientDimMismatch).
pub trait Gradient<V> {
    fn gradient(&self, x: &V) -> OptResult<V>;
}

impl<V, F> Objective<V> for F
where
    F: Fn(&V) -> f64,
{
    fn value(&self, x: &V) -> OptResult<f64> {
        Ok(self(x))
    }
}

impl<V, F> Gradient<V> for F
where
    F: Fn(&V) -> V,
{
    fn gradient(&self, x: &V) -> OptResult<V> {
        Ok(self(x))
    }
}

/// Generic minimization contract.
///
/// Object-safe so that solvers can be swapped behind `&dyn Optimizer<V>`.
/// Implementations validate `x0` before evaluating anything and fail with an
/// invalid-argument [`OptError`](crate::optimization::errors::OptError) when it
/// is empty or non-finite.
pub trait Optimizer<V: Vector> {
    fn optimize(
        &self, x0: V, objective: &dyn Objective<V>, gradient: &dyn Gradient<V>,
    ) -> OptResult<OptimOutcome<V>>;
}

/// Canonical result returned by every [`Optimizer`].
///
/// - `point`: final iterate (the optimal point when `converged`).
/// - `value`: objective value `f(point)`.
/// - `converged`: `true` only when the gradient-norm test ended the run;
///   exhausting the iteration budget yields `false` with the same
///   `point`/`value` shape.
/// - `status`: human-readable termination status.
/// - `iterations`: number of completed iterations.
/// - `fn_evals`: objective and gradient evaluation counters.
/// - `grad_norm`: `‖∇f(point)‖₂`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome<V> {
    pub point: V,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: f64,
}

impl<V: Vector> OptimOutcome<V> {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `point` check via `validate_point` (non-empty, all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    ///
    /// # Errors
    /// - Propagates any validation errors for `point` or `value`.
    pub fn new(
        point: V, value: f64, termination: TerminationStatus, iterations: usize,
        fn_evals: FnEvalMap, grad_norm: f64,
    ) -> OptResult<Self> {
        validate_point(&point)?;
        validate_value(value)?;
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        );
        let status = match termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            TerminationStatus::Terminated(reason) => reason.text().to_string(),
        };
        Ok(Self { point, value, converged, status, iterations, fn_evals, grad_norm })
    }

    /// Split into the `(value, point)` pair.
    pub fn into_pair(self) -> (f64, V) {
        (self.value, self.point)
    }
}
