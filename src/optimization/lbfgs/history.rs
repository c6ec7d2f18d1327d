//! lbfgs::history: bounded correction-pair memory and the two-loop recursion.
//!
//! Purpose
//! -------
//! Store the most recent `m` correction pairs `(sᵢ, yᵢ, ρᵢ)` and turn them
//! into an approximate inverse-Hessian product `H·g` without ever forming a
//! matrix.
//!
//! Key behaviors
//! -------------
//! - [`History::push_pair`] applies the curvature guard: a pair is stored
//!   only when `sᵀy > 1e-10`, with `ρ = 1/(sᵀy)`. Rejected pairs leave the
//!   history untouched.
//! - When full, the oldest pair is evicted before the new one is appended
//!   (FIFO), so the length never exceeds the capacity.
//! - [`History::two_loop`] runs the standard backward/forward recursion
//!   with initial scaling `γ = (s_newᵀ y_new)/(y_newᵀ y_new)` from the newest
//!   pair, or `γ = 1` when empty (the result is then `g` itself).
//!
//! Invariants & assumptions
//! ------------------------
//! - `len() ≤ capacity()` at all times; `capacity() ≥ 1`.
//! - Every stored pair satisfies `sᵀy > 1e-10`, hence `ρ > 0` and the
//!   implied inverse-Hessian approximation is positive definite.
//! - Pairs are ordered oldest → newest.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the guard, FIFO eviction after `m + 5` pushes, the
//!   empty-history identity and agreement with the exact inverse on a
//!   one-dimensional quadratic.
use std::collections::VecDeque;

use crate::optimization::{types::CURVATURE_EPS, vector::Vector};

/// One stored correction pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionPair<V> {
    /// Step `s = x_new − x_old`.
    pub s: V,
    /// Gradient change `y = g_new − g_old`.
    pub y: V,
    /// `1 / (sᵀy)`.
    pub rho: f64,
}

/// FIFO of at most `capacity` correction pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct History<V> {
    pairs: VecDeque<CorrectionPair<V>>,
    capacity: usize,
}

impl<V: Vector> History<V> {
    /// Empty history holding at most `capacity` pairs (`capacity` is raised
    /// to 1 if zero is passed; option validation rejects zero earlier).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { pairs: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pairs from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &CorrectionPair<V>> {
        self.pairs.iter()
    }

    pub fn newest(&self) -> Option<&CorrectionPair<V>> {
        self.pairs.back()
    }

    /// Offer a new pair; returns whether it passed the curvature guard.
    pub fn push_pair(&mut self, s: V, y: V) -> bool {
        let s_dot_y = s.inner_product(&y);
        if s_dot_y.is_nan() || s_dot_y <= CURVATURE_EPS {
            return false;
        }
        if self.pairs.len() == self.capacity {
            self.pairs.pop_front();
        }
        self.pairs.push_back(CorrectionPair { s, y, rho: 1.0 / s_dot_y });
        true
    }

    /// Approximate `H·grad` by the two-loop recursion.
    pub fn two_loop(&self, grad: &V) -> V {
        let mut q = grad.clone();
        let mut alphas = Vec::with_capacity(self.pairs.len());

        for pair in self.pairs.iter().rev() {
            let alpha = pair.rho * pair.s.inner_product(&q);
            q = q.sub(&pair.y.mul_scalar(alpha));
            alphas.push(alpha);
        }

        let gamma = match self.newest() {
            Some(pair) => pair.s.inner_product(&pair.y) / pair.y.inner_product(&pair.y),
            None => 1.0,
        };
        let mut r = q.mul_scalar(gamma);

        // `alphas` was filled newest-first.
        for (pair, alpha) in self.pairs.iter().zip(alphas.into_iter().rev()) {
            let beta = pair.rho * pair.y.inner_product(&r);
            r = r.add(&pair.s.mul_scalar(alpha - beta));
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::types::Point;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The curvature guard on `push_pair`.
    // - FIFO eviction and the capacity bound.
    // - The two-loop recursion on empty and populated histories.
    //
    // They intentionally DO NOT cover:
    // - How the solver forms `s` and `y` (see solver tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure pairs with non-positive or tiny curvature are rejected.
    //
    // Given
    // -----
    // - Pairs with `sᵀy = -1`, `sᵀy = 0`, `sᵀy = 1e-11` and `sᵀy = 2`.
    //
    // Expect
    // ------
    // - Only the last pair is stored, with `ρ = 0.5`.
    fn curvature_guard_rejects_non_positive_pairs() {
        // Arrange
        let mut history: History<Point> = History::new(3);

        // Act
        let negative = history.push_pair(array![1.0], array![-1.0]);
        let zero = history.push_pair(array![1.0, 0.0], array![0.0, 1.0]);
        let tiny = history.push_pair(array![1e-6], array![1e-5]);
        let accepted = history.push_pair(array![1.0], array![2.0]);

        // Assert
        assert!(!negative && !zero && !tiny);
        assert!(accepted);
        assert_eq!(history.len(), 1);
        assert_relative_eq!(history.newest().expect("one pair").rho, 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify FIFO eviction keeps exactly the newest `m` pairs.
    //
    // Given
    // -----
    // - `m = 4` and `m + 5 = 9` accepted pushes with `s = [k]`, `y = [1]`.
    //
    // Expect
    // ------
    // - Length 4 after every push beyond the 4th; stored `s` are `[6, 7, 8, 9]`.
    fn push_pair_evicts_oldest_when_full() {
        // Arrange
        let m = 4;
        let mut history: History<Point> = History::new(m);

        // Act
        for k in 0..(m + 5) {
            assert!(history.push_pair(array![k as f64 + 1.0], array![1.0]));
            assert!(history.len() <= m);
        }

        // Assert
        assert_eq!(history.len(), m);
        assert_eq!(history.capacity(), m);
        let stored: Vec<f64> = history.iter().map(|p| p.s[0]).collect();
        assert_eq!(stored, vec![6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    // Purpose
    // -------
    // Check that an empty history acts as the identity.
    //
    // Given
    // -----
    // - An empty history and `g = [3, -4]`.
    //
    // Expect
    // ------
    // - `two_loop(g) == g`.
    fn empty_history_two_loop_is_identity() {
        // Arrange
        let history: History<Point> = History::new(5);
        let g = array![3.0, -4.0];

        // Act
        let r = history.two_loop(&g);

        // Assert
        assert!(history.is_empty());
        assert_eq!(r, g);
    }

    #[test]
    // Purpose
    // -------
    // Confirm the recursion reproduces the exact inverse on a 1-D quadratic.
    //
    // Given
    // -----
    // - `f(x) = 2x²` (Hessian 4) with pair `s = [1]`, `y = [4]`.
    //
    // Expect
    // ------
    // - `two_loop([8]) = [2]`, i.e. `H⁻¹·g` exactly.
    fn single_pair_recovers_inverse_hessian_in_one_dimension() {
        // Arrange
        let mut history: History<Point> = History::new(2);
        history.push_pair(array![1.0], array![4.0]);

        // Act
        let r = history.two_loop(&array![8.0]);

        // Assert
        assert_relative_eq!(r[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the recursion works for the `Vec<f64>` backend and satisfies the
    // secant equation for the newest pair.
    //
    // Given
    // -----
    // - Two pairs in ℝ² taken from the quadratic with Hessian `diag(1, 10)`.
    //
    // Expect
    // ------
    // - `two_loop(y_new) = s_new` (secant condition `H·y = s`).
    fn two_loop_satisfies_secant_condition_for_newest_pair() {
        // Arrange
        let mut history: History<Vec<f64>> = History::new(2);
        history.push_pair(vec![1.0, 0.0], vec![1.0, 0.0]);
        history.push_pair(vec![0.5, 0.5], vec![0.5, 5.0]);

        // Act
        let r = history.two_loop(&vec![0.5, 5.0]);

        // Assert
        assert_relative_eq!(r[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(r[1], 0.5, epsilon = 1e-12);
    }
}
