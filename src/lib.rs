//! rust_lbfgs: limited-memory BFGS for unconstrained minimization.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small quasi-Newton
//! optimizer: callers supply an initial point, an objective `f(x)` and its
//! gradient `∇f(x)`, and receive the best point found together with run
//! diagnostics.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`optimization`] module as the public crate surface.
//! - Provide an L-BFGS solver ([`optimization::lbfgs::Lbfgs`]) driven by a
//!   strong-Wolfe backtracking line search, plus a steepest-descent
//!   alternative behind the same [`optimization::traits::Optimizer`] contract.
//! - Bridge problems written against `argmin` and objectives without an
//!   analytic gradient (finite differences) into the same capability traits.
//!
//! Invariants & assumptions
//! ------------------------
//! - All computation is synchronous and single-threaded; a solver value is
//!   immutable once built and can be shared across threads, while every
//!   `optimize` call owns its own history buffer and iteration state.
//! - Objectives and gradients are deterministic for identical inputs and
//!   return gradients with the same dimension as the point.
//!
//! Conventions
//! -----------
//! - The canonical point type is `ndarray::Array1<f64>` ([`optimization::Point`]);
//!   `Vec<f64>` is supported through the same [`optimization::vector::Vector`]
//!   capability.
//! - Errors are reported as [`optimization::errors::OptError`]; numeric edge
//!   cases (non-descent directions, failed curvature updates, exhausted
//!   iteration budgets) are handled by policy and never surface as errors.
//!
//! Downstream usage
//! ----------------
//! - Most callers write `use rust_lbfgs::optimization::prelude::*;` and call
//!   [`optimization::lbfgs::minimize`] or build a solver with
//!   [`optimization::lbfgs::Lbfgs::builder`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/integration_lbfgs.rs`
//!   exercises end-to-end convergence on quadratic and Rosenbrock problems.

pub mod optimization;
