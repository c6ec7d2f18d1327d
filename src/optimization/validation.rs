//! Validation helpers for the optimization layer.
//!
//! This module centralizes the consistency checks used across the optimizer
//! interface:
//!
//! - **Option checks**: [`verify_tol_grad`], [`verify_max_iter`],
//!   [`verify_lbfgs_mem`], [`verify_line_search_params`] reject
//!   configurations before a solver is built.
//! - **Initial point**: [`validate_point`] rejects empty or non-finite
//!   points (the invalid-argument path of `optimize`).
//! - **Gradient validation**: [`validate_grad`] enforces matching dimension
//!   and finite entries.
//! - **Objective values**: [`validate_value`] checks objective outputs for
//!   finiteness.
//!
//! Every helper returns a domain-specific [`OptError`] variant so higher
//! layers can report failures uniformly.
use crate::optimization::{
    errors::{OptError, OptResult},
    types::MIN_TOL_GRAD,
    vector::Vector,
};

/// Validate the gradient-norm stopping threshold.
///
/// The value must be **finite** and at least [`MIN_TOL_GRAD`] (`1e-12`).
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] otherwise.
pub fn verify_tol_grad(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
    }
    if tol < MIN_TOL_GRAD {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be at least 1e-12." });
    }
    Ok(())
}

/// Validate the iteration budget (`max_iter ≥ 1`).
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] when `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the L-BFGS history size (`mem ≥ 1`).
///
/// # Errors
/// Returns [`OptError::InvalidLBFGSMem`] when `mem == 0`.
pub fn verify_lbfgs_mem(mem: usize) -> OptResult<()> {
    if mem == 0 {
        return Err(OptError::InvalidLBFGSMem {
            mem,
            reason: "L-BFGS memory must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the line-search constants.
///
/// Rules:
/// - `c1` and `c2` finite with `0 < c1 < c2 < 1`.
/// - `initial_step` finite and strictly positive.
///
/// # Errors
/// Returns [`OptError::InvalidLineSearchParam`] naming the first offending
/// constant.
pub fn verify_line_search_params(c1: f64, c2: f64, initial_step: f64) -> OptResult<()> {
    if !c1.is_finite() || c1 <= 0.0 || c1 >= 1.0 {
        return Err(OptError::InvalidLineSearchParam {
            name: "c1",
            value: c1,
            reason: "Armijo constant must lie in (0, 1).",
        });
    }
    if !c2.is_finite() || c2 <= 0.0 || c2 >= 1.0 {
        return Err(OptError::InvalidLineSearchParam {
            name: "c2",
            value: c2,
            reason: "Curvature constant must lie in (0, 1).",
        });
    }
    if c1 >= c2 {
        return Err(OptError::InvalidLineSearchParam {
            name: "c2",
            value: c2,
            reason: "Curvature constant must exceed the Armijo constant.",
        });
    }
    if !initial_step.is_finite() || initial_step <= 0.0 {
        return Err(OptError::InvalidLineSearchParam {
            name: "initial_step",
            value: initial_step,
            reason: "Initial step must be finite and positive.",
        });
    }
    Ok(())
}

/// Validate a point: at least one coordinate and all coordinates finite.
///
/// # Errors
/// - [`OptError::EmptyPoint`] if the point has no coordinates.
/// - [`OptError::InvalidPoint`] with the index/value of the first non-finite
///   coordinate.
pub fn validate_point<V: Vector>(x: &V) -> OptResult<()> {
    if x.length() == 0 {
        return Err(OptError::EmptyPoint);
    }
    if let Some((index, value)) = x.first_non_finite() {
        return Err(OptError::InvalidPoint {
            index,
            value,
            reason: "Point coordinates must be finite.",
        });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.length() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad<V: Vector>(grad: &V, dim: usize) -> OptResult<()> {
    if grad.length() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.length() });
    }
    if let Some((index, value)) = grad.first_non_finite() {
        return Err(OptError::InvalidGradient {
            index,
            value,
            reason: "Gradient elements must be finite.",
        });
    }
    Ok(())
}

/// Validate that a scalar objective value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
