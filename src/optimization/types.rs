//! optimization::types: shared aliases and numeric constants.
//!
//! Purpose
//! -------
//! Centralize the canonical point type, the evaluation-counter map and the
//! fixed numeric thresholds used by the line search and the L-BFGS history
//! update, so every module agrees on the same values.
//!
//! Conventions
//! -----------
//! - `Point` is the default concrete vector; solvers are generic over any
//!   [`Vector`](crate::optimization::vector::Vector) and only tests and the
//!   finite-difference/argmin bridges lean on the alias.
//! - Counter keys follow argmin's naming (`"cost_count"`,
//!   `"gradient_count"`).
//!
//! Testing notes
//! -------------
//! - This module only defines aliases and constants; it is exercised by the
//!   modules that consume them.
use ndarray::Array1;
use std::collections::HashMap;

/// Canonical point / gradient container.
pub type Point = Array1<f64>;

/// Scalar objective value.
pub type Cost = f64;

/// Function-evaluation counters, keyed by counter name.
pub type FnEvalMap = HashMap<String, u64>;

/// Counter key for objective evaluations.
pub const COST_COUNT: &str = "cost_count";

/// Counter key for gradient evaluations.
pub const GRADIENT_COUNT: &str = "gradient_count";

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 10;

/// Default gradient-norm stopping threshold.
pub const DEFAULT_TOL_GRAD: f64 = 1e-6;

/// Smallest gradient-norm threshold accepted by option validation.
pub const MIN_TOL_GRAD: f64 = 1e-12;

/// Default iteration budget.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Default Armijo slope fraction.
pub const DEFAULT_C1: f64 = 1e-4;

/// Default curvature slope fraction.
pub const DEFAULT_C2: f64 = 0.9;

/// Default first trial step of the line search.
pub const DEFAULT_INITIAL_STEP: f64 = 1.0;

/// Curvature guard: a correction pair is stored only when `sᵀy` exceeds this.
pub const CURVATURE_EPS: f64 = 1e-10;

/// Step returned when the search direction is not a descent direction.
pub const NON_DESCENT_STEP: f64 = 1e-8;

/// Trial steps below this end the line search early.
pub const MIN_STEP: f64 = 1e-10;

/// Maximum number of trial steps per line search.
pub const MAX_LINE_SEARCH_ITERS: usize = 50;
