//! Element traits mapping Rust types to DType
//!
//! `Element` is the union of the two vector allow-lists; `RealElement` and
//! `ComplexElement` are the per-variant restrictions. A vector can only be
//! instantiated at a type implementing these traits, which makes the
//! "dtype outside the allow-list" construction fault a compile error.

use super::complex::{Complex64, Complex128};
use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Trait for types that can be elements of a sparse vector
///
/// This trait connects Rust's type system to the runtime [`DType`] tag.
/// It is implemented exactly for the allow-listed kinds: signed integers,
/// floats, and the two complex types.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `Add + Sub + Mul + Neg` - Arithmetic operations (Output = Self)
/// - `PartialEq` - Exact-zero detection for zero-suppression
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + fmt::Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Element type of the absolute value (always real-valued)
    ///
    /// For real kinds this is `Self`; for complex kinds it is the
    /// component float type.
    type Abs: RealElement;

    /// Zero value
    fn zero() -> Self;

    /// Convert to f64 for generic numeric operations
    ///
    /// # Complex Number Behavior
    ///
    /// For complex types this returns the **magnitude** (|z|), not the real
    /// part: a single-scalar representation is needed and the magnitude is
    /// the one norms and comparisons agree on. For the real part, access
    /// `.re` directly on the complex type.
    fn to_f64(self) -> f64;

    /// Absolute value (complex modulus for complex kinds)
    fn abs_value(self) -> Self::Abs;

    /// Raise to an integer power
    ///
    /// Exact for integer kinds (wrapping on overflow); negative exponents
    /// on integers floor toward zero, and the `power` operation rejects
    /// them before getting here.
    fn powi(self, exp: i32) -> Self;
}

/// Elements admitted by the real vector variant: signed integers and floats
pub trait RealElement: Element<Abs = Self> {}

/// Elements admitted by the complex vector variant
pub trait ComplexElement: Element {
    /// Component float type (f32 for Complex64, f64 for Complex128)
    type Real: RealElement;

    /// Real component
    fn re(self) -> Self::Real;

    /// Imaginary component
    fn im(self) -> Self::Real;

    /// Complex conjugate
    fn conj(self) -> Self;
}

macro_rules! impl_float_element {
    ($ty:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;
            type Abs = $ty;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs_value(self) -> Self {
                self.abs()
            }

            #[inline]
            fn powi(self, exp: i32) -> Self {
                <$ty>::powi(self, exp)
            }
        }

        impl RealElement for $ty {}
    };
}

macro_rules! impl_int_element {
    ($ty:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;
            type Abs = $ty;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            /// Wraps at the type minimum, matching numpy's integer abs
            #[inline]
            fn abs_value(self) -> Self {
                self.wrapping_abs()
            }

            /// Exact integer exponentiation, wrapping on overflow like
            /// numpy's fixed-width ints. Negative exponents floor to zero;
            /// the `power` operation rejects them before getting here.
            #[inline]
            fn powi(self, exp: i32) -> Self {
                if exp < 0 {
                    return 0;
                }
                self.wrapping_pow(exp as u32)
            }
        }

        impl RealElement for $ty {}
    };
}

macro_rules! impl_complex_element {
    ($ty:ty, $component:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;
            type Abs = $component;

            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            /// Returns magnitude (|z|) - this is a lossy conversion.
            /// For the real part, use `.re` directly.
            #[inline]
            fn to_f64(self) -> f64 {
                self.magnitude() as f64
            }

            #[inline]
            fn abs_value(self) -> Self::Abs {
                self.magnitude()
            }

            #[inline]
            fn powi(self, exp: i32) -> Self {
                <$ty>::powi(self, exp)
            }
        }

        impl ComplexElement for $ty {
            type Real = $component;

            #[inline]
            fn re(self) -> Self::Real {
                self.re
            }

            #[inline]
            fn im(self) -> Self::Real {
                self.im
            }

            #[inline]
            fn conj(self) -> Self {
                <$ty>::conj(self)
            }
        }
    };
}

impl_float_element!(f64, DType::F64);
impl_float_element!(f32, DType::F32);
impl_int_element!(i64, DType::I64);
impl_int_element!(i32, DType::I32);
impl_int_element!(i16, DType::I16);
impl_int_element!(i8, DType::I8);
impl_complex_element!(Complex64, f32, DType::Complex64);
impl_complex_element!(Complex128, f64, DType::Complex128);
