//! matvec: fixed-shape matrices and growable vectors over primitive numbers.
//!
//! The crate provides a const-generic `Matrix<R, C, T>`, a growable
//! `Vector<T>`, and the arithmetic between them: addition, scalar scaling,
//! matrix products, matrix-vector and vector-matrix products, and equality
//! that is exact for integers and tolerant (`EPSILON`) for floats.
//!
//! Shape errors that can be caught at compile time are; the rest surface as
//! `MathError` values at the call site.
pub mod config;
pub mod error;
pub mod math;
pub mod ops;

pub use config::DumpStyle;
pub use error::{MathError, Result};
pub use math::{Matrix, NumericBuffer, Scalar, Strided, Vector, EPSILON};
