use std::fmt::{Debug, Display};

use num_traits::Num;

/// Absolute tolerance used when comparing floating-point elements.
pub const EPSILON: f64 = 1e-5;

/// Element type accepted by [`Matrix`](crate::math::Matrix) and
/// [`Vector`](crate::math::Vector): any primitive integer or float.
///
/// Both operands of every binary operation share one `Scalar` type and the
/// result has that same type; nothing is widened or promoted.
///
/// The trait is sealed: the primitive impls below are the only ones.
///
/// ```compile_fail
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl matvec::Scalar for Meters {
///     fn approx_eq(self, other: Self) -> bool {
///         self == other
///     }
/// }
/// ```
pub trait Scalar: sealed::Sealed + Copy + Debug + Display + PartialOrd + Num {
    /// Absolute difference `|self - other|`, safe for unsigned types.
    ///
    /// For integers the result saturates at `MAX` when the true distance
    /// does not fit, e.g. `distance(i8::MIN, i8::MAX) == i8::MAX`.
    #[inline]
    fn distance(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }

    /// Element equality: exact for integers, within [`EPSILON`] for floats.
    fn approx_eq(self, other: Self) -> bool;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_exact_scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                #[inline]
                fn distance(self, other: Self) -> Self {
                    if self >= other {
                        self.saturating_sub(other)
                    } else {
                        other.saturating_sub(self)
                    }
                }

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    Scalar::distance(self, other) <= EPSILON as $t
                }
            }
        )*
    };
}

impl_exact_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);
