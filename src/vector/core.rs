//! Core sparse vector implementation: struct, creation, element access

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::slice::SliceSpec;

/// Coordinate-list sparse vector
///
/// A vector of logical length `dim` in which only non-zero entries are
/// materialized, as positionally paired index/value buffers: `values[k]`
/// is the value stored at logical position `indices[k]`.
///
/// # Invariants
///
/// - Stored indices are distinct and in `[0, dim)`. Duplicates are not
///   proactively prevented at construction; they are detected at lookup
///   time and reported as a fatal [`Error::DuplicateIndex`].
/// - Zero-valued entries conceptually do not belong in storage. This is
///   enforced by [`set`](Self::set), the sole mutation path; a vector
///   hand-constructed with explicit zeros simply reads them back.
///
/// The variant split is by element type: `SparseVector<f64>` (or any other
/// [`RealElement`](crate::dtype::RealElement)) is a real vector,
/// `SparseVector<Complex128>` a complex one, each with its own inner
/// product and projections.
#[derive(Debug, Clone)]
pub struct SparseVector<T: Element> {
    pub(crate) dim: usize,
    pub(crate) indices: Vec<usize>,
    pub(crate) values: Vec<T>,
}

impl<T: Element> SparseVector<T> {
    /// Create a sparse vector from index/value slices
    ///
    /// The buffers are copied. Supplied zero values are stored as-is; the
    /// constructor does not enforce zero-suppression.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths or any index
    /// is out of bounds for `dim`.
    pub fn new(dim: usize, indices: &[usize], values: &[T]) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(Error::length_mismatch(values.len(), indices.len()));
        }
        for &i in indices {
            if i >= dim {
                return Err(Error::IndexOutOfBounds {
                    index: i,
                    size: dim,
                });
            }
        }
        Ok(Self {
            dim,
            indices: indices.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Create an all-zero vector of the given dimension
    pub fn empty(dim: usize) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Logical length (the dimension), independent of how many entries are stored
    #[inline]
    pub fn len(&self) -> usize {
        self.dim
    }

    /// Returns true if the dimension is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Number of stored (non-zero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Runtime dtype tag of the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Stored indices, positionally paired with [`values`](Self::values)
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Stored values, positionally paired with [`indices`](Self::indices)
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Approximate memory usage of the storage buffers in bytes
    pub fn memory_usage(&self) -> usize {
        self.nnz() * (std::mem::size_of::<usize>() + T::DTYPE.size_in_bytes())
    }

    /// Find the storage slot `k` such that `indices[k] == i`
    ///
    /// Returns `Ok(None)` when `i` has no stored entry.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `i >= dim`.
    /// - [`Error::DuplicateIndex`] if more than one slot matches: that is
    ///   a broken uniqueness invariant, reported rather than resolved.
    pub fn locate(&self, i: usize) -> Result<Option<usize>> {
        if i >= self.dim {
            return Err(Error::IndexOutOfBounds {
                index: i,
                size: self.dim,
            });
        }
        let mut found = None;
        for (k, &idx) in self.indices.iter().enumerate() {
            if idx == i {
                if found.is_some() {
                    return Err(Error::DuplicateIndex { index: i });
                }
                found = Some(k);
            }
        }
        Ok(found)
    }

    /// Value at logical position `i`, or the dtype zero if absent
    pub fn get(&self, i: usize) -> Result<T> {
        Ok(match self.locate(i)? {
            Some(k) => self.values[k],
            None => T::zero(),
        })
    }

    /// Set the value at logical position `i`
    ///
    /// This is the sole mutation path and the enforcement point for
    /// zero-suppression: a zero value removes the entry if present (no-op
    /// if absent), a non-zero value inserts or overwrites.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let slot = self.locate(i)?;
        if value == T::zero() {
            if let Some(k) = slot {
                // storage order is not part of the contract
                self.indices.swap_remove(k);
                self.values.swap_remove(k);
            }
        } else {
            match slot {
                Some(k) => self.values[k] = value,
                None => {
                    self.indices.push(i);
                    self.values.push(value);
                }
            }
        }
        Ok(())
    }

    /// Set every listed position to `value`
    pub fn set_many(&mut self, indices: &[usize], value: T) -> Result<()> {
        for &i in indices {
            self.set(i, value)?;
        }
        Ok(())
    }

    /// Set every position selected by `spec` to `value`
    ///
    /// # Errors
    ///
    /// Resolved indices outside `[0, dim)` are faults on this write path.
    pub fn set_slice(&mut self, spec: &SliceSpec, value: T) -> Result<()> {
        for idx in spec.resolve(self.dim)? {
            if idx < 0 {
                return Err(Error::invalid_argument(
                    "spec",
                    format!("resolved index {idx} is negative"),
                ));
            }
            self.set(idx as usize, value)?;
        }
        Ok(())
    }

    /// Select the listed positions into a new, positionally re-indexed vector
    ///
    /// Negative positions resolve as `dim + i`. The result has dimension
    /// equal to the list length; entry `k` of the result carries the source
    /// value at the `k`-th requested position, when one is stored.
    pub fn select(&self, positions: &[isize]) -> Result<Self> {
        let mut out = Self::empty(positions.len());
        for (pos, &raw) in positions.iter().enumerate() {
            let idx = if raw < 0 { self.dim as isize + raw } else { raw };
            if idx < 0 {
                // below the dimension entirely: nothing stored there
                continue;
            }
            if let Some(k) = self.locate(idx as usize)? {
                out.indices.push(pos);
                out.values.push(self.values[k]);
            }
        }
        Ok(out)
    }

    /// Slice into a new, positionally re-indexed vector
    ///
    /// The spec is resolved against this vector's dimension; the result has
    /// dimension equal to the resolved index count, carrying over only
    /// entries present in the source.
    pub fn slice(&self, spec: &SliceSpec) -> Result<Self> {
        let resolved = spec.resolve(self.dim)?;
        let mut out = Self::empty(resolved.len());
        for (pos, &idx) in resolved.iter().enumerate() {
            if idx < 0 {
                continue;
            }
            if let Some(k) = self.locate(idx as usize)? {
                out.indices.push(pos);
                out.values.push(self.values[k]);
            }
        }
        Ok(out)
    }

    /// Materialize as a dense vector of length `dim`
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.dim];
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            dense[i] = v;
        }
        dense
    }

    /// Value equality: same dimension and same dense equivalent
    ///
    /// Storage order is irrelevant; two vectors holding the same entries in
    /// different slot orders compare equal.
    pub fn value_eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.to_dense() == other.to_dense()
    }
}

/// Anything queryable by absolute index, yielding the stored-or-zero value
///
/// Inner products visit only the left operand's stored entries and probe
/// the right operand at arbitrary positions; this seam lets the right
/// operand be a dense slice or another sparse vector alike.
pub trait VectorQuery<T: Element> {
    /// Value at absolute position `index`
    ///
    /// # Errors
    ///
    /// Out-of-bounds positions are faults, mirroring [`SparseVector::get`].
    fn fetch(&self, index: usize) -> Result<T>;
}

impl<T: Element> VectorQuery<T> for SparseVector<T> {
    #[inline]
    fn fetch(&self, index: usize) -> Result<T> {
        self.get(index)
    }
}

impl<T: Element> VectorQuery<T> for [T] {
    #[inline]
    fn fetch(&self, index: usize) -> Result<T> {
        self.get(index).copied().ok_or(Error::IndexOutOfBounds {
            index,
            size: self.len(),
        })
    }
}

impl<T: Element> VectorQuery<T> for Vec<T> {
    #[inline]
    fn fetch(&self, index: usize) -> Result<T> {
        self.as_slice().fetch(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let v = SparseVector::new(5, &[0, 3], &[1.5f64, -2.0]).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.dtype(), DType::F64);
        assert_eq!(v.indices(), &[0, 3]);
        assert_eq!(v.values(), &[1.5, -2.0]);
    }

    #[test]
    fn test_creation_length_mismatch() {
        let result = SparseVector::new(5, &[0, 3], &[1.5f64]);
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_creation_index_out_of_bounds() {
        let result = SparseVector::new(3, &[0, 5], &[1.0f64, 2.0]);
        assert!(matches!(result, Err(Error::IndexOutOfBounds { .. })));
    }

    #[test]
    fn test_get_present_and_absent() {
        let v = SparseVector::new(4, &[1], &[7i32]).unwrap();
        assert_eq!(v.get(1).unwrap(), 7);
        assert_eq!(v.get(0).unwrap(), 0);
        assert!(v.get(4).is_err());
    }

    #[test]
    fn test_set_insert_overwrite_remove() {
        let mut v = SparseVector::<f64>::empty(4);
        v.set(2, 3.0).unwrap();
        assert_eq!(v.nnz(), 1);
        v.set(2, 5.0).unwrap();
        assert_eq!(v.nnz(), 1);
        assert_eq!(v.get(2).unwrap(), 5.0);
        v.set(2, 0.0).unwrap();
        assert_eq!(v.nnz(), 0);
        assert_eq!(v.locate(2).unwrap(), None);
        // removing an absent entry is a no-op
        v.set(1, 0.0).unwrap();
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_duplicate_index_is_fatal() {
        // the constructor does not deduplicate; lookup must refuse
        let v = SparseVector::new(4, &[2, 2], &[1.0f64, 2.0]).unwrap();
        assert!(matches!(v.locate(2), Err(Error::DuplicateIndex { index: 2 })));
        assert!(v.get(2).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let v = SparseVector::new(4, &[1], &[2.0f64]).unwrap();
        let mut w = v.clone();
        w.set(1, 9.0).unwrap();
        assert_eq!(v.get(1).unwrap(), 2.0);
        assert_eq!(w.get(1).unwrap(), 9.0);
    }

    #[test]
    fn test_select_with_negative_positions() {
        let v = SparseVector::new(6, &[0, 5], &[1.0f64, 2.0]).unwrap();
        let s = v.select(&[-1, 0, 3]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.get(0).unwrap(), 2.0); // position -1 -> index 5
        assert_eq!(s.get(1).unwrap(), 1.0);
        assert_eq!(s.get(2).unwrap(), 0.0);
    }

    #[test]
    fn test_slice_reindexes_positionally() {
        let v = SparseVector::new(10, &[7, 9], &[1.0f64, 2.0]).unwrap();
        let s = v.slice(&SliceSpec::from(-3..)).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.get(0).unwrap(), 1.0);
        assert_eq!(s.get(2).unwrap(), 2.0);
        assert_eq!(s.nnz(), 2);
    }

    #[test]
    fn test_slice_past_dimension_faults() {
        let v = SparseVector::new(10, &[7], &[1.0f64]).unwrap();
        assert!(v.slice(&SliceSpec::from(8..12)).is_err());
    }

    #[test]
    fn test_set_slice() {
        let mut v = SparseVector::<f64>::empty(6);
        v.set_slice(&SliceSpec::from(1..4), 2.0).unwrap();
        assert_eq!(v.nnz(), 3);
        v.set_slice(&SliceSpec::full(), 0.0).unwrap();
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_set_many() {
        let mut v = SparseVector::<i32>::empty(5);
        v.set_many(&[0, 2, 4], 3).unwrap();
        assert_eq!(v.nnz(), 3);
        assert_eq!(v.get(2).unwrap(), 3);
    }

    #[test]
    fn test_to_dense() {
        let v = SparseVector::new(4, &[0, 2], &[3.0f64, -1.0]).unwrap();
        assert_eq!(v.to_dense(), vec![3.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_value_eq_ignores_storage_order() {
        let a = SparseVector::new(4, &[0, 2], &[1.0f64, 2.0]).unwrap();
        let b = SparseVector::new(4, &[2, 0], &[2.0f64, 1.0]).unwrap();
        assert!(a.value_eq(&b));
    }

    #[test]
    fn test_memory_usage() {
        let v = SparseVector::new(100, &[1, 2], &[1.0f64, 2.0]).unwrap();
        assert_eq!(v.memory_usage(), 2 * (std::mem::size_of::<usize>() + 8));
    }

    #[test]
    fn test_vector_query_slice() {
        let dense = vec![1.0f64, 5.0, 2.0, 0.0];
        assert_eq!(dense.fetch(1).unwrap(), 5.0);
        assert!(dense.fetch(4).is_err());
    }
}
