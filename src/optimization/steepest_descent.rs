//! Steepest descent: the plain-gradient alternative behind [`Optimizer`].
//!
//! Each iteration moves along `-∇f(x)` with the same strong-Wolfe
//! backtracking search and the same stopping rules as L-BFGS (gradient norm
//! below `tol_grad`, or `max_iter` iterations). Mostly useful as a baseline
//! and to swap solvers behind `&dyn Optimizer<V>`.
use argmin::core::{TerminationReason, TerminationStatus};
use slog::Logger;

use crate::optimization::{
    counting::CountedProblem,
    errors::OptResult,
    line_search::{LineSearch, LineSearchOptions, StrongWolfeBacktracking},
    observer::{discard_logger, log_iteration, log_termination},
    traits::{Gradient, Objective, OptimOutcome, Optimizer},
    types::{DEFAULT_MAX_ITER, DEFAULT_TOL_GRAD},
    validation::{validate_point, verify_max_iter, verify_tol_grad},
    vector::Vector,
};

const SOLVER_NAME: &str = "steepest descent";

/// Gradient-descent solver with a strong-Wolfe line search.
#[derive(Clone)]
pub struct SteepestDescent {
    tol_grad: f64,
    max_iter: usize,
    line_search: StrongWolfeBacktracking,
    logger: Logger,
}

impl SteepestDescent {
    /// Validated constructor.
    ///
    /// # Errors
    /// `InvalidTolGrad` or `InvalidMaxIter`.
    pub fn new(tol_grad: f64, max_iter: usize, line_search: LineSearchOptions) -> OptResult<Self> {
        verify_tol_grad(tol_grad)?;
        verify_max_iter(max_iter)?;
        Ok(Self {
            tol_grad,
            max_iter,
            line_search: StrongWolfeBacktracking::new(line_search),
            logger: discard_logger(),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }
}

impl Default for SteepestDescent {
    fn default() -> Self {
        Self {
            tol_grad: DEFAULT_TOL_GRAD,
            max_iter: DEFAULT_MAX_ITER,
            line_search: StrongWolfeBacktracking::default(),
            logger: discard_logger(),
        }
    }
}

impl<V: Vector> Optimizer<V> for SteepestDescent {
    fn optimize(
        &self, x0: V, objective: &dyn Objective<V>, gradient: &dyn Gradient<V>,
    ) -> OptResult<OptimOutcome<V>> {
        validate_point(&x0)?;
        let problem = CountedProblem::new(objective, gradient, x0.length());
        let mut x = x0;
        let mut grad = problem.gradient(&x)?;
        let mut iter = 0;

        let termination = loop {
            if grad.norm2() < self.tol_grad {
                break TerminationReason::SolverConverged;
            }
            if iter >= self.max_iter {
                break TerminationReason::MaxItersReached;
            }
            let direction = grad.mul_scalar(-1.0);
            let step = self.line_search.search(&x, &direction, &problem, &problem, &grad)?;
            x = x.add_scaled(&direction, step);
            grad = problem.gradient(&x)?;
            iter += 1;
            log_iteration(&self.logger, SOLVER_NAME, iter, grad.norm2(), step, 0);
        };

        let value = problem.value(&x)?;
        let grad_norm = grad.norm2();
        log_termination(&self.logger, SOLVER_NAME, termination.text(), iter, value, grad_norm);
        OptimOutcome::new(
            x,
            value,
            TerminationStatus::Terminated(termination),
            iter,
            problem.fn_evals(),
            grad_norm,
        )
    }
}
