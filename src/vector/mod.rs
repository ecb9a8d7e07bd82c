//! Sparse vector core and its function library
//!
//! The central type is [`SparseVector`], a coordinate-list vector: a fixed
//! logical dimension with only the non-zero entries materialized as paired
//! index/value buffers. Element access, slicing and arithmetic live on the
//! type; conversions, inner products, powers and norms are free functions
//! in [`func`], re-exported here.
//!
//! # Usage
//!
//! ```
//! use sparsealg::vector::{to_sparse, norm2, SparseVector};
//!
//! let v: SparseVector<f64> = to_sparse(&[0.0, 3.0, 0.0, 4.0]);
//! assert_eq!(v.nnz(), 2);
//! assert_eq!(v.get(1)?, 3.0);
//! assert_eq!(norm2(&v), 5.0);
//! # Ok::<(), sparsealg::error::Error>(())
//! ```

mod arith;
mod complex;
mod core;
pub mod func;

pub use complex::DEFAULT_TOLERANCE;
pub use self::core::{SparseVector, VectorQuery};
pub use func::{abs, cdot, dot, norm, norm2, power, sum, to_dense, to_sparse, NormType};
