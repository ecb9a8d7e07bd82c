//! Complex vector surface: conjugation, component projections, cdot
//!
//! These operations are only available when the element type is one of the
//! complex kinds. Component projections produce vectors over the component
//! float type and filter entries whose projected component is numerically
//! close to zero, even when the original complex value was non-zero.

use crate::dtype::{ComplexElement, Element};
use crate::error::Result;

use super::core::{SparseVector, VectorQuery};

/// Default near-zero tolerance for component projections
///
/// A component with absolute value at or below this threshold is treated
/// as zero and dropped. This matches the conventional absolute tolerance
/// of floating near-equality checks; it is a convention, not a contract,
/// and the `*_with_tol` variants accept any other threshold.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

impl<T: ComplexElement> SparseVector<T> {
    /// Complex conjugate: same indices, conjugated values
    pub fn conj(&self) -> Self {
        Self {
            dim: self.dim,
            indices: self.indices.clone(),
            values: self.values.iter().map(|&v| v.conj()).collect(),
        }
    }

    /// Real-part projection with the default near-zero tolerance
    pub fn real_part(&self) -> SparseVector<T::Real> {
        self.real_part_with_tol(DEFAULT_TOLERANCE)
    }

    /// Real-part projection, dropping components within `tol` of zero
    pub fn real_part_with_tol(&self, tol: f64) -> SparseVector<T::Real> {
        self.project(tol, ComplexElement::re)
    }

    /// Imaginary-part projection with the default near-zero tolerance
    pub fn imag_part(&self) -> SparseVector<T::Real> {
        self.imag_part_with_tol(DEFAULT_TOLERANCE)
    }

    /// Imaginary-part projection, dropping components within `tol` of zero
    pub fn imag_part_with_tol(&self, tol: f64) -> SparseVector<T::Real> {
        self.project(tol, ComplexElement::im)
    }

    fn project(&self, tol: f64, component: impl Fn(T) -> T::Real) -> SparseVector<T::Real> {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            let c = component(v);
            if c.to_f64().abs() > tol {
                indices.push(i);
                values.push(c);
            }
        }
        SparseVector {
            dim: self.dim,
            indices,
            values,
        }
    }

    /// Complex inner product, conjugate-linear in the second argument:
    /// Σ value · conj(other\[index\]) over stored entries
    pub fn cdot<V: VectorQuery<T> + ?Sized>(&self, other: &V) -> Result<T> {
        let mut acc = T::zero();
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            acc = acc + v * other.fetch(i)?.conj();
        }
        Ok(acc)
    }
}
