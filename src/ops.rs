//! Arithmetic and comparison between matrices, vectors and scalars.
//!
//! Operations whose operand shapes live in the type (matrix + matrix,
//! matrix * matrix) are infallible. Operations that depend on a vector's
//! runtime length return [`Result`] and fail with
//! [`MathError::InconsistentOperands`]. The `std::ops` impls delegate to the
//! named functions below.

use std::ops::{Add, Mul, Sub};

use crate::error::{MathError, Result};
use crate::math::{Matrix, Scalar, Vector};

fn ensure_consistent(op: &'static str, lhs: usize, rhs: usize) -> Result<()> {
    if lhs != rhs {
        log::debug!("inconsistent operands for {}: {} vs {}", op, lhs, rhs);
        return Err(MathError::InconsistentOperands { op, lhs, rhs });
    }
    Ok(())
}

pub fn mat_add<const R: usize, const C: usize, T: Scalar>(
    lhs: &Matrix<R, C, T>,
    rhs: &Matrix<R, C, T>,
) -> Matrix<R, C, T> {
    Matrix::wrap(lhs.buffer().add(rhs.buffer()))
}

pub fn mat_sub<const R: usize, const C: usize, T: Scalar>(
    lhs: &Matrix<R, C, T>,
    rhs: &Matrix<R, C, T>,
) -> Matrix<R, C, T> {
    Matrix::wrap(lhs.buffer().sub(rhs.buffer()))
}

pub fn mat_scale<const R: usize, const C: usize, T: Scalar>(
    m: &Matrix<R, C, T>,
    factor: T,
) -> Matrix<R, C, T> {
    Matrix::wrap(m.buffer().scale(factor))
}

/// Standard product: `out[i][j]` is row `i` of `lhs` dotted with column `j`
/// of `rhs`.
pub fn mat_mul<const R: usize, const K: usize, const C: usize, T: Scalar>(
    lhs: &Matrix<R, K, T>,
    rhs: &Matrix<K, C, T>,
) -> Matrix<R, C, T> {
    let mut out = Matrix::<R, C, T>::zeros();
    for i in 0..R {
        let row = lhs.row(i);
        for j in 0..C {
            out[(i, j)] = row.dot(&rhs.column(j));
        }
    }
    out
}

/// `m * v` with `v` as a column vector; the result has one entry per row.
pub fn mat_vec_mul<const R: usize, const C: usize, T: Scalar>(
    m: &Matrix<R, C, T>,
    v: &Vector<T>,
) -> Result<Vector<T>> {
    ensure_consistent("matrix * vector", C, v.len())?;
    let column = v.buffer().slice(0, v.len(), 1);
    Ok((0..R).map(|i| m.row(i).dot(&column)).collect())
}

/// `v * m` with `v` as a row vector; the result has one entry per column.
pub fn vec_mat_mul<const R: usize, const C: usize, T: Scalar>(
    v: &Vector<T>,
    m: &Matrix<R, C, T>,
) -> Result<Vector<T>> {
    ensure_consistent("vector * matrix", v.len(), R)?;
    let row = v.buffer().slice(0, v.len(), 1);
    Ok((0..C).map(|j| row.dot(&m.column(j))).collect())
}

pub fn vec_add<T: Scalar>(lhs: &Vector<T>, rhs: &Vector<T>) -> Result<Vector<T>> {
    ensure_consistent("vector + vector", lhs.len(), rhs.len())?;
    Ok(Vector::from_buffer(lhs.buffer().add(rhs.buffer())))
}

pub fn vec_sub<T: Scalar>(lhs: &Vector<T>, rhs: &Vector<T>) -> Result<Vector<T>> {
    ensure_consistent("vector - vector", lhs.len(), rhs.len())?;
    Ok(Vector::from_buffer(lhs.buffer().sub(rhs.buffer())))
}

pub fn vec_scale<T: Scalar>(v: &Vector<T>, factor: T) -> Vector<T> {
    Vector::from_buffer(v.buffer().scale(factor))
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

impl<const R: usize, const C: usize, T: Scalar> PartialEq for Matrix<R, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer().all_close(other.buffer())
    }
}

impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer().all_close(other.buffer())
    }
}

// ---------------------------------------------------------------------------
// Matrix operators
// ---------------------------------------------------------------------------

impl<'a, 'b, const R: usize, const C: usize, T: Scalar> Add<&'b Matrix<R, C, T>>
    for &'a Matrix<R, C, T>
{
    type Output = Matrix<R, C, T>;

    fn add(self, rhs: &'b Matrix<R, C, T>) -> Self::Output {
        mat_add(self, rhs)
    }
}

impl<const R: usize, const C: usize, T: Scalar> Add for Matrix<R, C, T> {
    type Output = Matrix<R, C, T>;

    fn add(self, rhs: Self) -> Self::Output {
        mat_add(&self, &rhs)
    }
}

impl<'a, 'b, const R: usize, const C: usize, T: Scalar> Sub<&'b Matrix<R, C, T>>
    for &'a Matrix<R, C, T>
{
    type Output = Matrix<R, C, T>;

    fn sub(self, rhs: &'b Matrix<R, C, T>) -> Self::Output {
        mat_sub(self, rhs)
    }
}

impl<const R: usize, const C: usize, T: Scalar> Sub for Matrix<R, C, T> {
    type Output = Matrix<R, C, T>;

    fn sub(self, rhs: Self) -> Self::Output {
        mat_sub(&self, &rhs)
    }
}

impl<'a, 'b, const R: usize, const K: usize, const C: usize, T: Scalar> Mul<&'b Matrix<K, C, T>>
    for &'a Matrix<R, K, T>
{
    type Output = Matrix<R, C, T>;

    fn mul(self, rhs: &'b Matrix<K, C, T>) -> Self::Output {
        mat_mul(self, rhs)
    }
}

impl<const R: usize, const K: usize, const C: usize, T: Scalar> Mul<Matrix<K, C, T>>
    for Matrix<R, K, T>
{
    type Output = Matrix<R, C, T>;

    fn mul(self, rhs: Matrix<K, C, T>) -> Self::Output {
        mat_mul(&self, &rhs)
    }
}

impl<'a, 'b, const R: usize, const C: usize, T: Scalar> Mul<&'b Vector<T>> for &'a Matrix<R, C, T> {
    type Output = Result<Vector<T>>;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        mat_vec_mul(self, rhs)
    }
}

// ---------------------------------------------------------------------------
// Vector operators
// ---------------------------------------------------------------------------

impl<'a, 'b, const R: usize, const C: usize, T: Scalar> Mul<&'b Matrix<R, C, T>> for &'a Vector<T> {
    type Output = Result<Vector<T>>;

    fn mul(self, rhs: &'b Matrix<R, C, T>) -> Self::Output {
        vec_mat_mul(self, rhs)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Vector<T>> for &'a Vector<T> {
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &'b Vector<T>) -> Self::Output {
        vec_add(self, rhs)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Vector<T>> for &'a Vector<T> {
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &'b Vector<T>) -> Self::Output {
        vec_sub(self, rhs)
    }
}

// ---------------------------------------------------------------------------
// Scalar multiplication, both orders, one scalar type per impl
// ---------------------------------------------------------------------------

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<$t> for Matrix<R, C, $t> {
                type Output = Matrix<R, C, $t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    mat_scale(&self, rhs)
                }
            }

            impl<'a, const R: usize, const C: usize> Mul<$t> for &'a Matrix<R, C, $t> {
                type Output = Matrix<R, C, $t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    mat_scale(self, rhs)
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<R, C, $t>> for $t {
                type Output = Matrix<R, C, $t>;

                fn mul(self, rhs: Matrix<R, C, $t>) -> Self::Output {
                    mat_scale(&rhs, self)
                }
            }

            impl<'a, const R: usize, const C: usize> Mul<&'a Matrix<R, C, $t>> for $t {
                type Output = Matrix<R, C, $t>;

                fn mul(self, rhs: &'a Matrix<R, C, $t>) -> Self::Output {
                    mat_scale(rhs, self)
                }
            }

            impl Mul<$t> for Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    vec_scale(&self, rhs)
                }
            }

            impl<'a> Mul<$t> for &'a Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    vec_scale(self, rhs)
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: Vector<$t>) -> Self::Output {
                    vec_scale(&rhs, self)
                }
            }

            impl<'a> Mul<&'a Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: &'a Vector<$t>) -> Self::Output {
                    vec_scale(rhs, self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
