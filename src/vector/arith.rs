//! Sparse vector arithmetic
//!
//! All operations are value-oriented: they read their operands and produce
//! a fresh vector (clone-then-mutate), so zero-suppression is re-derived
//! wherever sums cancel. Fallible operations return `Result`; there are no
//! panicking operator shortcuts.

use crate::dtype::{Element, RealElement};
use crate::error::{Error, Result};

use super::core::{SparseVector, VectorQuery};

impl<T: Element> SparseVector<T> {
    /// Negation: same indices, negated values
    pub fn neg(&self) -> Self {
        Self {
            dim: self.dim,
            indices: self.indices.clone(),
            values: self.values.iter().map(|&v| -v).collect(),
        }
    }

    /// Element-wise sum with another vector of the same dimension
    ///
    /// Computed by cloning the left operand and accumulating every stored
    /// entry of the right through get/set, so entries that cancel to zero
    /// are dropped from the result.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.dim != other.dim {
            return Err(Error::DimensionMismatch {
                lhs: self.dim,
                rhs: other.dim,
            });
        }
        let mut out = self.clone();
        for (&i, &v) in other.indices.iter().zip(other.values.iter()) {
            let current = out.get(i)?;
            out.set(i, current + v)?;
        }
        Ok(out)
    }

    /// Broadcast sum with a scalar: every logical slot gains `scalar`
    ///
    /// Sweeps the full dimension (the result is generally dense), with
    /// cancellations re-suppressed by the set path.
    pub fn add_scalar(&self, scalar: T) -> Result<Self> {
        let mut out = self.clone();
        if scalar == T::zero() {
            return Ok(out);
        }
        for i in 0..self.dim {
            let current = out.get(i)?;
            out.set(i, current + scalar)?;
        }
        Ok(out)
    }

    /// Element-wise difference: `self - other`
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    /// Broadcast difference: `self - scalar`
    pub fn sub_scalar(&self, scalar: T) -> Result<Self> {
        self.add_scalar(-scalar)
    }

    /// Reflected broadcast difference: `scalar - self`
    pub fn rsub_scalar(&self, scalar: T) -> Result<Self> {
        self.neg().add_scalar(scalar)
    }

    /// Element-wise product with another vector of the same dimension
    ///
    /// Only the left operand's stored positions can survive: a position
    /// absent in the right operand is dropped, a present one carries the
    /// product (which is kept even when it multiplies out to exact zero,
    /// matching the in-place overwrite semantics).
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.dim != other.dim {
            return Err(Error::DimensionMismatch {
                lhs: self.dim,
                rhs: other.dim,
            });
        }
        let mut indices = Vec::with_capacity(self.nnz());
        let mut values = Vec::with_capacity(self.nnz());
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            if let Some(k) = other.locate(i)? {
                indices.push(i);
                values.push(v * other.values[k]);
            }
        }
        Ok(Self {
            dim: self.dim,
            indices,
            values,
        })
    }

    /// Scalar multiple
    ///
    /// Multiplying by zero returns a fresh all-zero vector of the same
    /// dimension; otherwise every stored value is scaled.
    pub fn scale(&self, scalar: T) -> Self {
        if scalar == T::zero() {
            return Self::empty(self.dim);
        }
        Self {
            dim: self.dim,
            indices: self.indices.clone(),
            values: self.values.iter().map(|&v| v * scalar).collect(),
        }
    }
}

impl<T: RealElement> SparseVector<T> {
    /// Real inner product: Σ value · other\[index\] over stored entries
    ///
    /// Only this vector's stored positions are visited; `other` may be any
    /// indexable operand (a dense slice or another sparse vector).
    pub fn dot<V: VectorQuery<T> + ?Sized>(&self, other: &V) -> Result<T> {
        let mut acc = T::zero();
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            acc = acc + v * other.fetch(i)?;
        }
        Ok(acc)
    }
}
