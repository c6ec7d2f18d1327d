//! lbfgs::options: validated L-BFGS configuration.
//!
//! Purpose
//! -------
//! Bundle the knobs of an L-BFGS run (history size, stopping threshold,
//! iteration budget, line-search constants, verbosity) in a single value that
//! is validated once at construction, so the solver can treat it as
//! internally consistent.
//!
//! Conventions
//! -----------
//! - Defaults: `mem = 10`, `tol_grad = 1e-6`, `max_iter = 1000`,
//!   `line_search = LineSearchOptions::default()`, `verbose = false`.
//! - Invalid values are rejected with the dedicated [`OptError`] variants
//!   (`InvalidLBFGSMem`, `InvalidTolGrad`, `InvalidMaxIter`).
use crate::optimization::{
    errors::{OptError, OptResult},
    line_search::LineSearchOptions,
    types::{DEFAULT_LBFGS_MEM, DEFAULT_MAX_ITER, DEFAULT_TOL_GRAD},
    validation::{verify_lbfgs_mem, verify_max_iter, verify_tol_grad},
};

/// L-BFGS configuration.
///
/// Fields:
/// - `mem: usize`: maximum number of stored correction pairs (`m ≥ 1`).
/// - `tol_grad: f64`: stop once `‖∇f(x)‖₂ < tol_grad` (finite, `≥ 1e-12`).
/// - `max_iter: usize`: iteration budget (`≥ 1`).
/// - `line_search: LineSearchOptions`: Armijo/curvature constants.
/// - `verbose: bool`: if `true`, the solver logs through
///   [`verbose_logger`](crate::optimization::observer::verbose_logger).
#[derive(Debug, Clone, PartialEq)]
pub struct LbfgsOptions {
    pub mem: usize,
    pub tol_grad: f64,
    pub max_iter: usize,
    pub line_search: LineSearchOptions,
    pub verbose: bool,
}

impl LbfgsOptions {
    /// Create validated options.
    ///
    /// # Errors
    /// Returns the [`OptError`] for the first invalid field, checked in the
    /// order `mem`, `tol_grad`, `max_iter`.
    pub fn new(
        mem: usize, tol_grad: f64, max_iter: usize, line_search: LineSearchOptions, verbose: bool,
    ) -> OptResult<Self> {
        let opts = Self { mem, tol_grad, max_iter, line_search, verbose };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check every field; used by the builder after piecemeal updates.
    pub fn validate(&self) -> OptResult<()> {
        verify_lbfgs_mem(self.mem)?;
        verify_tol_grad(self.tol_grad)?;
        verify_max_iter(self.max_iter)?;
        LineSearchOptions::new(
            self.line_search.c1,
            self.line_search.c2,
            self.line_search.initial_step,
        )
        .map(|_| ())
    }
}

impl Default for LbfgsOptions {
    fn default() -> Self {
        Self {
            mem: DEFAULT_LBFGS_MEM,
            tol_grad: DEFAULT_TOL_GRAD,
            max_iter: DEFAULT_MAX_ITER,
            line_search: LineSearchOptions::default(),
            verbose: false,
        }
    }
}

impl TryFrom<(usize, f64, usize)> for LbfgsOptions {
    type Error = OptError;

    /// Build from `(mem, tol_grad, max_iter)` with default line-search
    /// constants.
    fn try_from((mem, tol_grad, max_iter): (usize, f64, usize)) -> OptResult<Self> {
        Self::new(mem, tol_grad, max_iter, LineSearchOptions::default(), false)
    }
}
