//! optimization: capability contracts, line search, and solvers.
//!
//! Purpose
//! -------
//! Provide a cohesive layer for unconstrained minimization: callers hand an
//! initial point plus objective/gradient capabilities to an [`Optimizer`]
//! and get back an [`OptimOutcome`] without touching solver internals.
//!
//! Key behaviors
//! -------------
//! - Define the capability traits ([`traits`]) and the dense-vector algebra
//!   the solvers need ([`vector`]), implemented for `Array1<f64>` and
//!   `Vec<f64>` on top of `argmin-math`.
//! - Provide the strong-Wolfe backtracking line search ([`line_search`]),
//!   the L-BFGS solver ([`lbfgs`]) and a steepest-descent baseline
//!   ([`steepest_descent`]).
//! - Bridge external problem definitions: argmin problems via [`adapter`],
//!   derivative-free objectives via [`finite_diff`].
//! - Normalize configuration issues, invalid inputs and backend errors into
//!   a single enum ([`errors::OptError`]) with a common result alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - Options are validated when a solver is built; initial points are
//!   validated before the first evaluation.
//! - Every evaluation made by a solver passes through
//!   [`counting::CountedProblem`], which checks finiteness and dimensions
//!   and keeps the evaluation counters reported in the outcome.
//! - Non-descent directions, skipped curvature updates and exhausted
//!   budgets are policies, not errors.
//!
//! Conventions
//! -----------
//! - Solvers minimize; `OptimOutcome::value` is `f(point)`.
//! - Logging goes through `slog` ([`observer`]); nothing else in this layer
//!   performs I/O.
//!
//! Downstream usage
//! ----------------
//! - `use rust_lbfgs::optimization::prelude::*;` imports the traits, the
//!   solvers, the options and the error types.
//!
//! Testing notes
//! -------------
//! - Unit tests sit in each submodule; `tests/integration_lbfgs.rs` runs the
//!   end-to-end scenarios (quadratics, Rosenbrock, bridges, cross-check
//!   against argmin's own L-BFGS).

pub mod adapter;
pub mod counting;
pub mod errors;
pub mod finite_diff;
pub mod lbfgs;
pub mod line_search;
pub mod observer;
pub mod steepest_descent;
pub mod traits;
pub mod types;
pub mod validation;
pub mod vector;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adapter::ArgminProblem;
pub use self::errors::{OptError, OptResult};
pub use self::finite_diff::FiniteDiffGradient;
pub use self::lbfgs::{Lbfgs, LbfgsBuilder, LbfgsOptions, minimize};
pub use self::line_search::{LineSearch, LineSearchOptions, StrongWolfeBacktracking};
pub use self::steepest_descent::SteepestDescent;
pub use self::traits::{Gradient, Objective, OptimOutcome, Optimizer};
pub use self::types::{Cost, FnEvalMap, Point};
pub use self::vector::Vector;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_lbfgs::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::adapter::ArgminProblem;
    pub use super::errors::{OptError, OptResult};
    pub use super::finite_diff::FiniteDiffGradient;
    pub use super::lbfgs::prelude::*;
    pub use super::line_search::{LineSearch, LineSearchOptions, StrongWolfeBacktracking};
    pub use super::steepest_descent::SteepestDescent;
    pub use super::traits::{Gradient, Objective, OptimOutcome, Optimizer};
    pub use super::types::Point;
    pub use super::vector::Vector;
}
