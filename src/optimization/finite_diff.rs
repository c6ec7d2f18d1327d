//! optimization::finite_diff: gradient capability from an objective alone.
//!
//! Purpose
//! -------
//! Supply a [`Gradient`] for objectives that have no analytic derivative, by
//! finite differencing through the `finitediff` crate.
//!
//! Key behaviors
//! -------------
//! - Central differences are tried first.
//! - If any objective evaluation failed during the central pass, or the
//!   central gradient has non-finite entries, the gradient is recomputed once
//!   with forward differences.
//! - The forward pass is final: a captured objective error is returned as
//!   is, and a non-finite result fails validation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `finitediff` closures must return `f64`, so the first objective error
//!   is parked in a `RefCell<Option<OptError>>` and the closure returns
//!   `NaN`; the error is turned back into a real `Err` after the pass.
//! - Returned gradients satisfy [`validate_grad`] for the point's dimension.
//!
//! Conventions
//! -----------
//! - Implemented for both vector backends (`Array1<f64>` via the `ndarray`
//!   feature of `finitediff`, and `Vec<f64>`).
//!
//! Testing notes
//! -------------
//! - Unit tests cover agreement with analytic gradients, the forward
//!   fallback near a domain boundary, and error propagation.
use std::cell::RefCell;

use finitediff::FiniteDiff;

use crate::optimization::{
    errors::{OptError, OptResult},
    traits::{Gradient, Objective},
    types::Point,
    validation::validate_grad,
    vector::Vector,
};

/// Finite-difference gradient of the wrapped objective.
#[derive(Debug, Clone)]
pub struct FiniteDiffGradient<O> {
    objective: O,
}

impl<O> FiniteDiffGradient<O> {
    pub fn new(objective: O) -> Self {
        Self { objective }
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }
}

impl<O: Objective<Point>> Gradient<Point> for FiniteDiffGradient<O> {
    fn gradient(&self, x: &Point) -> OptResult<Point> {
        self.differentiate(
            x,
            |x: &Point, f: &dyn Fn(&Point) -> f64| x.central_diff(f),
            |x: &Point, f: &dyn Fn(&Point) -> f64| x.forward_diff(f),
        )
    }
}

impl<O: Objective<Vec<f64>>> Gradient<Vec<f64>> for FiniteDiffGradient<O> {
    fn gradient(&self, x: &Vec<f64>) -> OptResult<Vec<f64>> {
        self.differentiate(
            x,
            |x: &Vec<f64>, f: &dyn Fn(&Vec<f64>) -> f64| x.central_diff(f),
            |x: &Vec<f64>, f: &dyn Fn(&Vec<f64>) -> f64| x.forward_diff(f),
        )
    }
}

impl<O> FiniteDiffGradient<O> {
    fn differentiate<V, C, F>(&self, x: &V, central: C, forward: F) -> OptResult<V>
    where
        V: Vector,
        O: Objective<V>,
        C: Fn(&V, &dyn Fn(&V) -> f64) -> V,
        F: Fn(&V, &dyn Fn(&V) -> f64) -> V,
    {
        let dim = x.length();
        let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
        let cost_func = |x: &V| -> f64 {
            match self.objective.value(x) {
                Ok(value) => value,
                Err(e) => {
                    let mut slot = closure_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                    f64::NAN
                }
            }
        };

        let fd_grad = central(x, &cost_func);
        if closure_err.borrow().is_none() && validate_grad(&fd_grad, dim).is_ok() {
            return Ok(fd_grad);
        }

        closure_err.replace(None);
        let fd_grad = forward(x, &cost_func);
        if let Some(err) = closure_err.take() {
            return Err(err);
        }
        validate_grad(&fd_grad, dim)?;
        Ok(fd_grad)
    }
}
