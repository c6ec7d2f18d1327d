//! High-level entry point for minimizing with L-BFGS.
//!
//! Builds a solver from validated [`LbfgsOptions`] and runs it once; use
//! [`Lbfgs`] directly when the same solver serves many runs.
use crate::optimization::{
    errors::OptResult,
    lbfgs::{options::LbfgsOptions, solver::Lbfgs},
    traits::{Gradient, Objective, OptimOutcome, Optimizer},
    vector::Vector,
};

/// Minimize `objective` from `x0` with L-BFGS.
///
/// # Behavior
/// - Validates `opts` and `x0` before evaluating anything.
/// - Runs until `‖∇f(x)‖₂ < opts.tol_grad` or `opts.max_iter` iterations.
///
/// # Errors
/// - Option errors (`InvalidLBFGSMem`, `InvalidTolGrad`, `InvalidMaxIter`,
///   `InvalidLineSearchParam`).
/// - Invalid-argument errors for `x0` and for malformed evaluations.
/// - Errors returned by `objective` or `gradient`.
///
/// # Example
/// ```
/// use ndarray::{array, Array1};
/// use rust_lbfgs::optimization::lbfgs::{minimize, LbfgsOptions};
///
/// let f = |x: &Array1<f64>| (x[0] - 1.0).powi(2) + (x[1] - 2.0).powi(2);
/// let g = |x: &Array1<f64>| array![2.0 * (x[0] - 1.0), 2.0 * (x[1] - 2.0)];
///
/// let out = minimize(array![0.0, 0.0], &f, &g, &LbfgsOptions::default())?;
/// assert!(out.converged);
/// assert!((out.point[0] - 1.0).abs() < 1e-6);
/// # Ok::<(), rust_lbfgs::optimization::errors::OptError>(())
/// ```
pub fn minimize<V: Vector>(
    x0: V, objective: &dyn Objective<V>, gradient: &dyn Gradient<V>, opts: &LbfgsOptions,
) -> OptResult<OptimOutcome<V>> {
    let solver = Lbfgs::new(opts.clone())?;
    solver.optimize(x0, objective, gradient)
}
