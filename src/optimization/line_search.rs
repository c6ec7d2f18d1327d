//! optimization::line_search: strong-Wolfe backtracking step selection.
//!
//! Purpose
//! -------
//! Choose a step length `α > 0` along a search direction `d` from a point
//! `x` such that the trial point `x + α·d` both decreases the objective
//! sufficiently (Armijo) and flattens the directional slope (curvature).
//!
//! Key behaviors
//! -------------
//! - Non-descent directions (`∇f(x)·d ≥ 0`) are answered immediately with
//!   the fixed minimal step [`NON_DESCENT_STEP`]; this is a policy, not a
//!   failure.
//! - Starting from `initial_step`, at most [`MAX_LINE_SEARCH_ITERS`] trial
//!   steps are tried. Steps that break Armijo are too long and are halved
//!   toward the lower bracket; steps that satisfy Armijo but leave the slope
//!   steeper than `c2·∇f(x)·d` are too short and are doubled (or bisected
//!   once an upper bracket exists); steps whose slope turned strongly
//!   positive become the new upper bracket.
//! - A step is accepted when `f(x+αd) ≤ f(x) + c1·α·∇f(x)·d` and
//!   `|∇f(x+αd)·d| ≤ c2·|∇f(x)·d|`.
//! - When no step is accepted within the budget, or the trial step drops
//!   below [`MIN_STEP`], the search returns its best effort: the last
//!   Armijo-satisfying step if one was seen, otherwise the last trial step.
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned step is always strictly positive.
//! - No state is kept between calls; every objective/gradient evaluation is
//!   an observable call on the supplied capabilities.
//! - A non-finite objective value or gradient at a trial point marks the
//!   step as too long; the same condition at `x` itself is an error.
//!
//! Conventions
//! -----------
//! - Constants live in [`LineSearchOptions`] and are validated once at
//!   construction; the search itself never re-validates them.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the non-descent fallback, acceptance on quadratics,
//!   step expansion for too-short initial steps, and the best-effort
//!   fallback when the curvature condition cannot be met.
use crate::optimization::{
    errors::{OptError, OptResult},
    traits::{Gradient, Objective},
    types::{
        DEFAULT_C1, DEFAULT_C2, DEFAULT_INITIAL_STEP, MAX_LINE_SEARCH_ITERS, MIN_STEP,
        NON_DESCENT_STEP,
    },
    validation::verify_line_search_params,
    vector::Vector,
};

/// Line-search constants.
///
/// - `c1`: Armijo slope fraction (default `1e-4`).
/// - `c2`: curvature slope fraction (default `0.9`).
/// - `initial_step`: first trial step (default `1.0`).
///
/// Rules (enforced by [`LineSearchOptions::new`]): `0 < c1 < c2 < 1` and
/// `initial_step` finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchOptions {
    pub c1: f64,
    pub c2: f64,
    pub initial_step: f64,
}

impl LineSearchOptions {
    /// Construct validated line-search constants.
    ///
    /// # Errors
    /// - [`OptError::InvalidLineSearchParam`] naming the first bad constant.
    pub fn new(c1: f64, c2: f64, initial_step: f64) -> OptResult<Self> {
        verify_line_search_params(c1, c2, initial_step)?;
        Ok(Self { c1, c2, initial_step })
    }
}

impl Default for LineSearchOptions {
    fn default() -> Self {
        Self { c1: DEFAULT_C1, c2: DEFAULT_C2, initial_step: DEFAULT_INITIAL_STEP }
    }
}

/// Step-length selection along a search direction.
pub trait LineSearch<V> {
    /// Return a step length `α > 0` for the move `x + α·direction`.
    ///
    /// `current_grad` is `∇f(x)`, already known to the caller.
    ///
    /// # Errors
    /// Only errors raised by the capabilities at `x` (or non-recoverable
    /// errors at trial points) are propagated.
    fn search(
        &self, x: &V, direction: &V, objective: &dyn Objective<V>, gradient: &dyn Gradient<V>,
        current_grad: &V,
    ) -> OptResult<f64>;
}

/// Bracketing backtracking search for the strong Wolfe conditions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrongWolfeBacktracking {
    opts: LineSearchOptions,
}

impl StrongWolfeBacktracking {
    pub fn new(opts: LineSearchOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &LineSearchOptions {
        &self.opts
    }
}

impl<V: Vector> LineSearch<V> for StrongWolfeBacktracking {
    fn search(
        &self, x: &V, direction: &V, objective: &dyn Objective<V>, gradient: &dyn Gradient<V>,
        current_grad: &V,
    ) -> OptResult<f64> {
        let dir_deriv = current_grad.inner_product(direction);
        if dir_deriv >= 0.0 {
            return Ok(NON_DESCENT_STEP);
        }

        let LineSearchOptions { c1, c2, initial_step } = self.opts;
        let current_value = objective.value(x)?;

        let mut alpha = initial_step;
        let mut lo = 0.0_f64;
        let mut hi: Option<f64> = None;

        for _ in 0..MAX_LINE_SEARCH_ITERS {
            let trial = x.add_scaled(direction, alpha);
            let armijo = match trial_value(objective, &trial)? {
                Some(value) => value <= current_value + c1 * alpha * dir_deriv,
                None => false,
            };

            if armijo {
                match trial_slope(gradient, &trial, direction)? {
                    Some(slope) if slope.abs() <= c2 * dir_deriv.abs() => return Ok(alpha),
                    Some(slope) if slope < 0.0 => {
                        // Still descending steeply: the step is too short.
                        lo = alpha;
                        alpha = match hi {
                            Some(hi) => 0.5 * (lo + hi),
                            None => 2.0 * alpha,
                        };
                    }
                    _ => {
                        hi = Some(alpha);
                        alpha = 0.5 * (lo + alpha);
                    }
                }
            } else {
                hi = Some(alpha);
                alpha = 0.5 * (lo + alpha);
            }

            if alpha < MIN_STEP {
                break;
            }
        }

        Ok(if lo > 0.0 { lo } else { alpha })
    }
}

// ---- Helper Methods ----

fn trial_value<V>(objective: &dyn Objective<V>, trial: &V) -> OptResult<Option<f64>> {
    match objective.value(trial) {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        Ok(_) | Err(OptError::NonFiniteCost { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

fn trial_slope<V: Vector>(
    gradient: &dyn Gradient<V>, trial: &V, direction: &V,
) -> OptResult<Option<f64>> {
    match gradient.gradient(trial) {
        Ok(g) => {
            let slope = g.inner_product(direction);
            Ok(slope.is_finite().then_some(slope))
        }
        Err(OptError::InvalidGradient { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
