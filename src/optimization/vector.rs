//! optimization::vector: the dense-vector capability the solvers consume.
//!
//! Purpose
//! -------
//! Describe the minimal algebra an optimizer needs from a point/gradient
//! type, so the solvers stay generic over the concrete container. The
//! arithmetic itself is delegated to `argmin-math`, which already provides
//! pure, allocation-returning operations for `Vec<f64>` and
//! `ndarray::Array1<f64>`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every operation is pure: operands are never mutated and results are
//!   fresh values. The two-loop recursion relies on this.
//! - Binary operations assume both operands have the same `length()`;
//!   dimension checks happen once in the validation layer, not here.
//!
//! Conventions
//! -----------
//! - `copy()` is `Clone::clone`.
//! - `first_non_finite` reports the first NaN/±∞ coordinate and exists so
//!   validation can produce index-carrying errors without knowing the
//!   concrete container.
use argmin_math::{ArgminAdd, ArgminDot, ArgminL2Norm, ArgminMul, ArgminSub};
use ndarray::Array1;

/// Dense real-valued vector used for points, directions and gradients.
pub trait Vector: Clone {
    /// `self + other`.
    fn add(&self, other: &Self) -> Self;

    /// `self - other`.
    fn sub(&self, other: &Self) -> Self;

    /// `s · self`.
    fn mul_scalar(&self, s: f64) -> Self;

    /// Euclidean inner product `selfᵀ other`.
    fn inner_product(&self, other: &Self) -> f64;

    /// Euclidean norm `‖self‖₂`.
    fn norm2(&self) -> f64;

    /// Number of coordinates.
    fn length(&self) -> usize;

    /// Index and value of the first non-finite coordinate, if any.
    fn first_non_finite(&self) -> Option<(usize, f64)>;

    /// `self + s · other`, the update used for trial points.
    fn add_scaled(&self, other: &Self, s: f64) -> Self {
        self.add(&other.mul_scalar(s))
    }
}

impl Vector for Array1<f64> {
    fn add(&self, other: &Self) -> Self {
        <Array1<f64> as ArgminAdd<Array1<f64>, Array1<f64>>>::add(self, other)
    }

    fn sub(&self, other: &Self) -> Self {
        <Array1<f64> as ArgminSub<Array1<f64>, Array1<f64>>>::sub(self, other)
    }

    fn mul_scalar(&self, s: f64) -> Self {
        <Array1<f64> as ArgminMul<f64, Array1<f64>>>::mul(self, &s)
    }

    fn inner_product(&self, other: &Self) -> f64 {
        <Array1<f64> as ArgminDot<Array1<f64>, f64>>::dot(self, other)
    }

    fn norm2(&self) -> f64 {
        <Array1<f64> as ArgminL2Norm<f64>>::l2_norm(self)
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.iter().copied().enumerate().find(|(_, v)| !v.is_finite())
    }
}

impl Vector for Vec<f64> {
    fn add(&self, other: &Self) -> Self {
        <Vec<f64> as ArgminAdd<Vec<f64>, Vec<f64>>>::add(self, other)
    }

    fn sub(&self, other: &Self) -> Self {
        <Vec<f64> as ArgminSub<Vec<f64>, Vec<f64>>>::sub(self, other)
    }

    fn mul_scalar(&self, s: f64) -> Self {
        <Vec<f64> as ArgminMul<f64, Vec<f64>>>::mul(self, &s)
    }

    fn inner_product(&self, other: &Self) -> f64 {
        <Vec<f64> as ArgminDot<Vec<f64>, f64>>::dot(self, other)
    }

    fn norm2(&self) -> f64 {
        <Vec<f64> as ArgminL2Norm<f64>>::l2_norm(self)
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.iter().copied().enumerate().find(|(_, v)| !v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The argmin-math backed arithmetic for Array1<f64> and Vec<f64>.
    // - Purity of the operations (operands unchanged).
    // - Non-finite detection.
    //
    // They intentionally DO NOT cover:
    // - Dimension mismatches, which are rejected upstream by validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the basic algebra on ndarray vectors.
    //
    // Given
    // -----
    // - `a = [1, 2, 3]`, `b = [4, -1, 0.5]`.
    //
    // Expect
    // ------
    // - Sum, difference, scaling, inner product and norm match hand values.
    fn array1_algebra_matches_hand_computation() {
        // Arrange
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, -1.0, 0.5];

        // Act
        let sum = Vector::add(&a, &b);
        let diff = Vector::sub(&a, &b);
        let scaled = a.mul_scalar(2.0);
        let ip = a.inner_product(&b);
        let norm = b.norm2();

        // Assert
        assert_eq!(sum, array![5.0, 1.0, 3.5]);
        assert_eq!(diff, array![-3.0, 3.0, 2.5]);
        assert_eq!(scaled, array![2.0, 4.0, 6.0]);
        assert_relative_eq!(ip, 3.5);
        assert_relative_eq!(norm, 17.25_f64.sqrt());
        assert_eq!(a.length(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Verify the same operations on plain `Vec<f64>` and that operands stay
    // untouched.
    //
    // Given
    // -----
    // - `x = [1, 1]`, `d = [2, -4]`.
    //
    // Expect
    // ------
    // - `x + 0.5·d = [2, -1]` and `x`, `d` unchanged afterwards.
    fn vec_add_scaled_is_pure() {
        // Arrange
        let x = vec![1.0, 1.0];
        let d = vec![2.0, -4.0];

        // Act
        let trial = x.add_scaled(&d, 0.5);

        // Assert
        assert_eq!(trial, vec![2.0, -1.0]);
        assert_eq!(x, vec![1.0, 1.0]);
        assert_eq!(d, vec![2.0, -4.0]);
        assert_relative_eq!(d.norm2(), 20.0_f64.sqrt());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `first_non_finite` reports the first offending coordinate.
    //
    // Given
    // -----
    // - A vector with `inf` at index 1 and `NaN` at index 2.
    //
    // Expect
    // ------
    // - `Some((1, inf))`; a finite vector yields `None`.
    fn first_non_finite_reports_first_offender() {
        // Arrange
        let bad = array![0.0, f64::INFINITY, f64::NAN];
        let good = vec![0.0, -1.0];

        // Act / Assert
        assert_eq!(bad.first_non_finite(), Some((1, f64::INFINITY)));
        assert_eq!(good.first_non_finite(), None);
    }
}
