//! lbfgs::builders: step-by-step construction of an [`Lbfgs`] solver.
//!
//! Purpose
//! -------
//! Let callers override individual options (history size, tolerance,
//! budget, line-search constants, verbosity, logger) without spelling out a
//! full [`LbfgsOptions`], while still validating everything exactly once in
//! [`LbfgsBuilder::build`].
//!
//! Conventions
//! -----------
//! - Setters take `self` by value and return `Self`; nothing is validated
//!   until `build`.
//! - An explicit logger wins over `verbose`; without one, `verbose = true`
//!   selects [`verbose_logger`] and `false` the discarding logger.
//!
//! Downstream usage
//! ----------------
//! ```ignore
//! let solver = Lbfgs::builder().mem(5).tol_grad(1e-8).max_iter(200).build()?;
//! let out = solver.optimize(x0, &f, &g)?;
//! ```
use slog::Logger;

use crate::optimization::{
    errors::OptResult,
    lbfgs::{options::LbfgsOptions, solver::Lbfgs},
    line_search::LineSearchOptions,
    observer::{discard_logger, verbose_logger},
};

/// Builder for [`Lbfgs`], seeded with [`LbfgsOptions::default`].
#[derive(Clone, Default)]
pub struct LbfgsBuilder {
    opts: LbfgsOptions,
    logger: Option<Logger>,
}

impl LbfgsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every option at once.
    pub fn options(mut self, opts: LbfgsOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn mem(mut self, mem: usize) -> Self {
        self.opts.mem = mem;
        self
    }

    pub fn tol_grad(mut self, tol_grad: f64) -> Self {
        self.opts.tol_grad = tol_grad;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.opts.max_iter = max_iter;
        self
    }

    pub fn line_search(mut self, line_search: LineSearchOptions) -> Self {
        self.opts.line_search = line_search;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.opts.verbose = verbose;
        self
    }

    /// Route solver records to `logger`.
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validate the accumulated options and produce the solver.
    ///
    /// # Errors
    /// The first violation found by [`LbfgsOptions::validate`].
    pub fn build(self) -> OptResult<Lbfgs> {
        self.opts.validate()?;
        let logger = match self.logger {
            Some(logger) => logger,
            None if self.opts.verbose => verbose_logger(),
            None => discard_logger(),
        };
        Ok(Lbfgs::from_parts(self.opts, logger))
    }
}
