//! Vector function library
//!
//! Free functions layered on top of the sparse vector core: dense/sparse
//! conversion, inner products, elementwise power, sum, absolute value and
//! norms. All are pure; none mutates its input.

use crate::dtype::{ComplexElement, Element, RealElement};
use crate::error::{Error, Result};

use super::core::{SparseVector, VectorQuery};

/// Norm type for [`norm`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormType {
    /// L1 norm: sum of absolute values
    L1,
    /// L2 norm: square root of sum of squares
    L2,
    /// L-infinity norm: maximum absolute value
    Linf,
    /// General p-norm for order p >= 1
    P(f64),
}

/// Materialize a sparse vector as a dense one
///
/// The result has the full logical length, zero-initialized, with stored
/// entries written at their indices.
pub fn to_dense<T: Element>(v: &SparseVector<T>) -> Vec<T> {
    v.to_dense()
}

/// Convert a dense vector to sparse form
///
/// Positions exactly equal to the dtype zero are skipped; every other
/// position becomes a stored entry. The output variant follows the element
/// type: a real slice yields a real vector, a complex slice a complex one.
pub fn to_sparse<T: Element>(dense: &[T]) -> SparseVector<T> {
    let mut out = SparseVector::empty(dense.len());
    for (i, &v) in dense.iter().enumerate() {
        if v != T::zero() {
            out.indices.push(i);
            out.values.push(v);
        }
    }
    out
}

/// Real inner product: Σ value · other\[index\] over `a`'s stored entries
pub fn dot<T, V>(a: &SparseVector<T>, b: &V) -> Result<T>
where
    T: RealElement,
    V: VectorQuery<T> + ?Sized,
{
    a.dot(b)
}

/// Complex inner product, conjugate-linear in the second argument
pub fn cdot<T, V>(a: &SparseVector<T>, b: &V) -> Result<T>
where
    T: ComplexElement,
    V: VectorQuery<T> + ?Sized,
{
    a.cdot(b)
}

/// Raise every stored value to an integer power
///
/// Indices are unchanged and nothing is re-suppressed: a value whose power
/// is exactly zero keeps its slot, unlike the set path.
///
/// # Errors
///
/// Negative exponents on integer dtypes are an [`Error::InvalidArgument`]
/// fault.
pub fn power<T: Element>(v: &SparseVector<T>, exp: i32) -> Result<SparseVector<T>> {
    if exp < 0 && T::DTYPE.is_int() {
        return Err(Error::invalid_argument(
            "exp",
            format!("negative exponent {exp} is undefined for integer dtype {}", T::DTYPE),
        ));
    }
    Ok(SparseVector {
        dim: v.dim,
        indices: v.indices.clone(),
        values: v.values.iter().map(|&x| x.powi(exp)).collect(),
    })
}

/// Sum of all stored values
///
/// Absent entries contribute nothing, consistent with them being zero.
pub fn sum<T: Element>(v: &SparseVector<T>) -> T {
    v.values.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Absolute value: same indices, magnitudes as values
///
/// The result is always real-valued, whatever the input variant: a complex
/// vector maps to a vector over its component float type.
pub fn abs<T: Element>(v: &SparseVector<T>) -> SparseVector<T::Abs> {
    SparseVector {
        dim: v.dim,
        indices: v.indices.clone(),
        values: v.values.iter().map(|&x| x.abs_value()).collect(),
    }
}

/// Norm of the stored value sequence
///
/// Computed over stored values only; absent entries contribute zero, which
/// is exact for every supported norm type.
///
/// # Errors
///
/// A p-norm order below 1 is not a norm and is an
/// [`Error::InvalidArgument`] fault.
pub fn norm<T: Element>(v: &SparseVector<T>, norm: NormType) -> Result<f64> {
    let mags = v.values.iter().map(|&x| x.to_f64().abs());
    match norm {
        NormType::L1 => Ok(mags.sum()),
        NormType::L2 => Ok(norm2(v)),
        NormType::Linf => Ok(mags.fold(0.0, f64::max)),
        NormType::P(p) => {
            if p < 1.0 {
                return Err(Error::invalid_argument(
                    "norm",
                    format!("p-norm order {p} must be at least 1"),
                ));
            }
            Ok(mags.map(|m| m.powf(p)).sum::<f64>().powf(1.0 / p))
        }
    }
}

/// Euclidean norm, the conventional default order
pub fn norm2<T: Element>(v: &SparseVector<T>) -> f64 {
    v.values
        .iter()
        .map(|&x| {
            let m = x.to_f64().abs();
            m * m
        })
        .sum::<f64>()
        .sqrt()
}
