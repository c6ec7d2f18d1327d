//! lbfgs: limited-memory BFGS over the crate's capability traits.
//!
//! Purpose
//! -------
//! Provide the quasi-Newton solver: a bounded correction-pair [`history`],
//! validated [`options`] and [`builders`], the iteration in [`solver`], and
//! the one-shot [`minimize`] entry point.
//!
//! Key behaviors
//! -------------
//! - Search directions come from the two-loop recursion over at most `mem`
//!   stored pairs; pairs failing the curvature guard are skipped.
//! - Step lengths come from
//!   [`StrongWolfeBacktracking`](crate::optimization::line_search::StrongWolfeBacktracking).
//! - Termination on the gradient norm or the iteration budget, reported
//!   through [`OptimOutcome`](crate::optimization::traits::OptimOutcome).
//!
//! Downstream usage
//! ----------------
//! - One-off runs: [`minimize`] with [`LbfgsOptions`].
//! - Reusable or swappable solvers: [`Lbfgs`] (or [`Lbfgs::builder`]) behind
//!   `&dyn Optimizer<V>`.

pub mod api;
pub mod builders;
pub mod history;
pub mod options;
pub mod solver;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::builders::LbfgsBuilder;
pub use self::history::{CorrectionPair, History};
pub use self::options::LbfgsOptions;
pub use self::solver::{Lbfgs, LbfgsState};

pub mod prelude {
    pub use super::api::minimize;
    pub use super::builders::LbfgsBuilder;
    pub use super::options::LbfgsOptions;
    pub use super::solver::Lbfgs;
}
