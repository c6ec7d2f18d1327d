//! lbfgs::solver: the L-BFGS iteration and its `Optimizer` implementation.
//!
//! Purpose
//! -------
//! Drive the quasi-Newton loop: check the gradient norm, build a search
//! direction from the bounded history, pick a step with the line search,
//! move, and record the new correction pair.
//!
//! Key behaviors
//! -------------
//! - [`Lbfgs`] is immutable once built; every `optimize` call creates its own
//!   [`LbfgsState`], so a single solver can be shared across threads.
//! - The run stops as soon as `‖∇f(x)‖₂ < tol_grad` (converged) or after
//!   `max_iter` iterations (budget exhausted). Both paths return the same
//!   `(point, value)` shape; `converged`/`status` tell them apart.
//! - The final objective value is evaluated exactly once, after the loop.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x0` is validated before any evaluation; invalid points fail with an
//!   invalid-argument [`OptError`](crate::optimization::errors::OptError).
//! - Every objective/gradient call goes through a [`CountedProblem`], so
//!   values and gradients seen by the loop are finite and well-shaped.
//! - Non-descent directions and rejected curvature pairs are logged, never
//!   raised.
//!
//! Testing notes
//! -------------
//! - Unit tests step [`LbfgsState`] directly to observe the history during a
//!   run; end-to-end scenarios live in `tests/integration_lbfgs.rs`.
use argmin::core::{TerminationReason, TerminationStatus};
use slog::Logger;

use crate::optimization::{
    counting::CountedProblem,
    errors::OptResult,
    lbfgs::{builders::LbfgsBuilder, history::History, options::LbfgsOptions},
    line_search::{LineSearch, StrongWolfeBacktracking},
    observer::{
        discard_logger, log_curvature_skip, log_iteration, log_non_descent, log_termination,
        verbose_logger,
    },
    traits::{Gradient, Objective, OptimOutcome, Optimizer},
    validation::validate_point,
    vector::Vector,
};

pub(crate) const SOLVER_NAME: &str = "L-BFGS";

/// Limited-memory BFGS solver.
#[derive(Clone)]
pub struct Lbfgs {
    opts: LbfgsOptions,
    line_search: StrongWolfeBacktracking,
    logger: Logger,
}

impl Lbfgs {
    /// Build a solver from validated options.
    ///
    /// # Errors
    /// Returns the first option violation reported by
    /// [`LbfgsOptions::validate`].
    pub fn new(opts: LbfgsOptions) -> OptResult<Self> {
        opts.validate()?;
        let logger = if opts.verbose { verbose_logger() } else { discard_logger() };
        Ok(Self::from_parts(opts, logger))
    }

    /// Start a [`LbfgsBuilder`] from the default options.
    pub fn builder() -> LbfgsBuilder {
        LbfgsBuilder::new()
    }

    pub fn options(&self) -> &LbfgsOptions {
        &self.opts
    }

    pub(crate) fn from_parts(opts: LbfgsOptions, logger: Logger) -> Self {
        let line_search = StrongWolfeBacktracking::new(opts.line_search);
        Self { opts, line_search, logger }
    }
}

impl Default for Lbfgs {
    fn default() -> Self {
        Self::from_parts(LbfgsOptions::default(), discard_logger())
    }
}

impl std::fmt::Debug for Lbfgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lbfgs")
            .field("opts", &self.opts)
            .field("line_search", &self.line_search)
            .finish_non_exhaustive()
    }
}

impl<V: Vector> Optimizer<V> for Lbfgs {
    fn optimize(
        &self, x0: V, objective: &dyn Objective<V>, gradient: &dyn Gradient<V>,
    ) -> OptResult<OptimOutcome<V>> {
        validate_point(&x0)?;
        let problem = CountedProblem::new(objective, gradient, x0.length());
        let grad0 = problem.gradient(&x0)?;
        let mut state = LbfgsState::new(x0, grad0, self.opts.mem);

        let termination = loop {
            if state.grad_norm() < self.opts.tol_grad {
                break TerminationReason::SolverConverged;
            }
            if state.iter() >= self.opts.max_iter {
                break TerminationReason::MaxItersReached;
            }
            let step = state.step(&problem, &self.line_search, &self.logger)?;
            log_iteration(
                &self.logger,
                SOLVER_NAME,
                state.iter(),
                state.grad_norm(),
                step,
                state.history().len(),
            );
        };

        let value = problem.value(state.point())?;
        let grad_norm = state.grad_norm();
        log_termination(
            &self.logger,
            SOLVER_NAME,
            termination.text(),
            state.iter(),
            value,
            grad_norm,
        );
        let iterations = state.iter();
        let fn_evals = problem.fn_evals();
        OptimOutcome::new(
            state.into_point(),
            value,
            TerminationStatus::Terminated(termination),
            iterations,
            fn_evals,
            grad_norm,
        )
    }
}

/// Per-run mutable state of an L-BFGS solve.
///
/// Created by `optimize` for a single call and dropped when it returns.
#[derive(Debug, Clone)]
pub struct LbfgsState<V> {
    x: V,
    grad: V,
    history: History<V>,
    iter: usize,
}

impl<V: Vector> LbfgsState<V> {
    /// State at `x` with known gradient `grad` and an empty history of
    /// capacity `mem`.
    pub fn new(x: V, grad: V, mem: usize) -> Self {
        Self { x, grad, history: History::new(mem), iter: 0 }
    }

    pub fn iter(&self) -> usize {
        self.iter
    }

    pub fn point(&self) -> &V {
        &self.x
    }

    pub fn gradient(&self) -> &V {
        &self.grad
    }

    pub fn history(&self) -> &History<V> {
        &self.history
    }

    pub fn grad_norm(&self) -> f64 {
        self.grad.norm2()
    }

    pub fn into_point(self) -> V {
        self.x
    }

    /// Search direction `-H·∇f(x)` from the current history.
    pub fn direction(&self) -> V {
        self.history.two_loop(&self.grad).mul_scalar(-1.0)
    }

    /// Perform one iteration and return the accepted step length.
    ///
    /// # Errors
    /// Propagates evaluation errors from `problem` (line search or the
    /// gradient at the new point).
    pub fn step<P>(
        &mut self, problem: &P, line_search: &dyn LineSearch<V>, logger: &Logger,
    ) -> OptResult<f64>
    where
        P: Objective<V> + Gradient<V>,
    {
        let direction = self.direction();
        let dir_deriv = self.grad.inner_product(&direction);
        if dir_deriv >= 0.0 {
            log_non_descent(logger, SOLVER_NAME, self.iter, dir_deriv);
        }

        let step = line_search.search(&self.x, &direction, problem, problem, &self.grad)?;
        let new_x = self.x.add_scaled(&direction, step);
        let new_grad = problem.gradient(&new_x)?;

        let s = new_x.sub(&self.x);
        let y = new_grad.sub(&self.grad);
        let s_dot_y = s.inner_product(&y);
        if !self.history.push_pair(s, y) {
            log_curvature_skip(logger, self.iter, s_dot_y);
        }

        self.x = new_x;
        self.grad = new_grad;
        self.iter += 1;
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{errors::OptError, types::Point};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - History growth and FIFO eviction during an actual run.
    // - Descent of the two-loop direction.
    // - Termination reporting (converged vs. budget exhausted).
    // - Rejection of invalid initial points before any evaluation.
    //
    // They intentionally DO NOT cover:
    // - Multi-dimensional benchmark problems (see integration tests).
    // -------------------------------------------------------------------------

    fn quartic(x: &Point) -> f64 {
        x[0].powi(4)
    }

    fn quartic_grad(x: &Point) -> Point {
        array![4.0 * x[0].powi(3)]
    }

    #[test]
    // Purpose
    // -------
    // Verify the history fills up to `m` and then evicts oldest-first while
    // the solver runs.
    //
    // Given
    // -----
    // - `f(x) = x⁴` from `x = [5]` (slow, curvature-positive progress).
    // - `m = 10`, stepped `m + 5 = 15` times.
    //
    // Expect
    // ------
    // - History length stabilizes at 10.
    // - The first two steps `s₁`, `s₂` are no longer stored.
    fn history_stabilizes_at_capacity_and_drops_earliest_steps() {
        // Arrange
        let m = 10;
        let x0 = array![5.0];
        let grad0 = quartic_grad(&x0);
        let mut state = LbfgsState::new(x0, grad0, m);
        let problem: CountedProblem<'_, Point> = CountedProblem::new(&quartic, &quartic_grad, 1);
        let line_search = StrongWolfeBacktracking::default();
        let logger = discard_logger();
        let mut steps: Vec<f64> = Vec::new();

        // Act
        for _ in 0..(m + 5) {
            let before = state.point()[0];
            state.step(&problem, &line_search, &logger).expect("step should succeed");
            steps.push(state.point()[0] - before);
            assert!(state.history().len() <= m);
        }

        // Assert
        assert_eq!(state.iter(), m + 5);
        assert_eq!(state.history().len(), m);
        let stored: Vec<f64> = state.history().iter().map(|p| p.s[0]).collect();
        assert!(!stored.contains(&steps[0]));
        assert!(!stored.contains(&steps[1]));
        assert_eq!(stored.last(), steps.last());
        assert!(state.history().iter().all(|p| p.rho > 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Check that the two-loop direction is a descent direction once the
    // history holds curvature information.
    //
    // Given
    // -----
    // - `f(x, y) = x² + 10y²` from `[3, -2]`, three steps taken.
    //
    // Expect
    // ------
    // - `∇f(x)·d < 0` before every step.
    fn two_loop_direction_is_descent() {
        // Arrange
        let f = |x: &Point| x[0] * x[0] + 10.0 * x[1] * x[1];
        let g = |x: &Point| array![2.0 * x[0], 20.0 * x[1]];
        let x0 = array![3.0, -2.0];
        let mut state = LbfgsState::new(x0.clone(), g(&x0), 5);
        let problem: CountedProblem<'_, Point> = CountedProblem::new(&f, &g, 2);
        let line_search = StrongWolfeBacktracking::default();
        let logger = discard_logger();

        // Act / Assert
        for _ in 0..3 {
            if state.grad_norm() < 1e-12 {
                break;
            }
            let d = state.direction();
            assert!(state.gradient().dot(&d) < 0.0);
            state.step(&problem, &line_search, &logger).expect("step should succeed");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure budget exhaustion is reported as non-converged with the same
    // result shape.
    //
    // Given
    // -----
    // - `f(x) = x⁴` from `[5]`, `max_iter = 3`, `tol_grad = 1e-12`.
    //
    // Expect
    // ------
    // - `converged == false`, `iterations == 3`, `value == f(point)`.
    fn budget_exhaustion_is_not_converged() {
        // Arrange
        let solver = Lbfgs::new(LbfgsOptions::try_from((10, 1e-12, 3)).expect("valid options"))
            .expect("valid solver");

        // Act
        let out = solver.optimize(array![5.0], &quartic, &quartic_grad).expect("run succeeds");

        // Assert
        assert!(!out.converged);
        assert_eq!(out.iterations, 3);
        assert_eq!(out.status, "Maximum number of iterations reached");
        assert_abs_diff_eq!(out.value, quartic(&out.point), epsilon = 1e-15);
        assert!(out.point[0].abs() < 5.0);
    }

    #[test]
    // Purpose
    // -------
    // Confirm a start point that already satisfies the tolerance returns at
    // once.
    //
    // Given
    // -----
    // - `f(x) = x²` at `[0]`.
    //
    // Expect
    // ------
    // - Converged after zero iterations, one gradient and one objective call.
    fn stationary_start_converges_without_iterating() {
        // Arrange
        let f = |x: &Point| x[0] * x[0];
        let g = |x: &Point| array![2.0 * x[0]];
        let solver = Lbfgs::default();

        // Act
        let out = solver.optimize(array![0.0], &f, &g).expect("run succeeds");

        // Assert
        assert!(out.converged);
        assert_eq!(out.iterations, 0);
        assert_eq!(out.status, "Solver converged");
        assert_eq!(out.fn_evals.get("cost_count"), Some(&1));
        assert_eq!(out.fn_evals.get("gradient_count"), Some(&1));
    }

    #[test]
    // Purpose
    // -------
    // Verify invalid initial points fail before any evaluation.
    //
    // Given
    // -----
    // - An empty point and a point containing `NaN`; capabilities that panic
    //   if called.
    //
    // Expect
    // ------
    // - `EmptyPoint` and `InvalidPoint`, both invalid-argument errors.
    fn invalid_initial_point_is_rejected_before_evaluation() {
        // Arrange
        let f = |_: &Point| -> f64 { panic!("objective must not be called") };
        let g = |_: &Point| -> Point { panic!("gradient must not be called") };
        let solver = Lbfgs::default();

        // Act
        let empty = solver.optimize(Point::zeros(0), &f, &g).expect_err("empty point");
        let nan = solver.optimize(array![1.0, f64::NAN], &f, &g).expect_err("NaN point");

        // Assert
        assert_eq!(empty, OptError::EmptyPoint);
        assert!(matches!(nan, OptError::InvalidPoint { index: 1, .. }));
        assert!(empty.is_invalid_argument() && nan.is_invalid_argument());
    }
}
