//! # sparsealg
//!
//! **Coordinate-list sparse vectors with real and complex arithmetic.**
//!
//! sparsealg stores high-dimensional vectors where most entries are zero as
//! paired index/value buffers, and provides element access, slicing,
//! arithmetic and inner products over them without ever materializing the
//! zeros.
//!
//! ## Features
//!
//! - **Sparse storage**: fixed logical dimension, only non-zero entries
//!   materialized, zero-suppression maintained by the mutation path
//! - **Two variants**: real vectors (signed integer and float elements) and
//!   complex vectors (`Complex64`/`Complex128`), selected by element type
//! - **Arithmetic**: negation, vector and broadcast scalar add/sub,
//!   elementwise and scalar multiply, type-specific inner products
//! - **Indexing**: scalar get/set, start/stop/step slices with negative
//!   bounds, index-list selection
//! - **Function library**: dense↔sparse conversion, powers, sums, absolute
//!   value, norms
//!
//! ## Quick Start
//!
//! ```
//! use sparsealg::prelude::*;
//! use sparsealg::vector::to_sparse;
//!
//! let a: SparseVector<f64> = to_sparse(&[3.0, 0.0, -1.0, 0.0]);
//! let b = vec![1.0, 5.0, 2.0, 0.0];
//!
//! assert_eq!(a.nnz(), 2);
//! assert_eq!(a.dot(&b)?, 1.0);
//! # Ok::<(), sparsealg::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod slice;
pub mod vector;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{Complex64, Complex128, ComplexElement, DType, Element, RealElement};
    pub use crate::error::{Error, Result};
    pub use crate::slice::SliceSpec;
    pub use crate::vector::{NormType, SparseVector, VectorQuery};
}
