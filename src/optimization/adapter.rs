//! Adapter that exposes an `argmin` problem as this crate's capabilities.
//!
//! Problems already written against argmin's `CostFunction` and `Gradient`
//! traits can be handed to any [`Optimizer`](crate::optimization::traits::Optimizer)
//! by wrapping them in [`ArgminProblem`]. The cost is used as the objective
//! as-is (argmin also minimizes), and argmin errors are converted into
//! [`OptError`](crate::optimization::errors::OptError) through the crate's
//! `From<argmin::core::Error>` implementation.
use argmin::core::{CostFunction, Gradient as ArgminGradient};

use crate::optimization::{
    errors::OptResult,
    traits::{Gradient, Objective},
};

/// Bridges an argmin problem `P` to [`Objective`] and [`Gradient`].
///
/// - `Objective::value` returns `P::cost(x)`.
/// - `Gradient::gradient` returns `P::gradient(x)`.
#[derive(Debug, Clone)]
pub struct ArgminProblem<P> {
    pub problem: P,
}

impl<P> ArgminProblem<P> {
    /// Wrap an argmin problem.
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    pub fn into_inner(self) -> P {
        self.problem
    }
}

impl<P, V> Objective<V> for ArgminProblem<P>
where
    P: CostFunction<Param = V, Output = f64>,
{
    /// Evaluate the argmin cost.
    ///
    /// # Errors
    /// Any argmin error, mapped into `OptError`.
    fn value(&self, x: &V) -> OptResult<f64> {
        Ok(self.problem.cost(x)?)
    }
}

impl<P, V> Gradient<V> for ArgminProblem<P>
where
    P: ArgminGradient<Param = V, Gradient = V>,
{
    /// Evaluate the argmin gradient.
    ///
    /// # Errors
    /// Any argmin error, mapped into `OptError`.
    fn gradient(&self, x: &V) -> OptResult<V> {
        Ok(self.problem.gradient(x)?)
    }
}
