//! Numeric containers.
//!
//! `Matrix` (fixed shape, const-generic) and `Vector` (growable) both own a
//! `NumericBuffer`; rows and columns are read through `Strided` views
//! without copying.
pub mod buffer;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use buffer::{NumericBuffer, Strided};
pub use matrix::Matrix;
pub use scalar::{Scalar, EPSILON};
pub use vector::Vector;
