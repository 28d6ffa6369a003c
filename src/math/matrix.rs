use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::DumpStyle;
use crate::error::{MathError, Result};
use crate::math::buffer::{NumericBuffer, Strided};
use crate::math::scalar::Scalar;

/// Dense `R x C` matrix stored row-major in a [`NumericBuffer`].
///
/// The shape is part of the type, so adding matrices of different shapes or
/// multiplying matrices with mismatched inner dimensions does not compile.
/// Element `(i, j)` lives at linear offset `i * C + j`.
#[derive(Clone, Debug)]
pub struct Matrix<const R: usize, const C: usize, T> {
    data: NumericBuffer<T>,
}

impl<const R: usize, const C: usize, T> Matrix<R, C, T> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    /// Wrap a flat row-major buffer, which must hold exactly `R * C` elements.
    pub fn from_buffer(data: NumericBuffer<T>) -> Result<Self> {
        if data.len() != R * C {
            log::debug!(
                "rejecting buffer of length {} for a {}x{} matrix",
                data.len(),
                R,
                C
            );
            return Err(MathError::ShapeMismatch {
                rows: R,
                cols: C,
                found: format!("buffer of length {}", data.len()),
            });
        }
        Ok(Self { data })
    }

    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::from_buffer(NumericBuffer::from_vec(data))
    }

    /// Wrap a buffer already known to hold `R * C` elements.
    pub(crate) fn wrap(data: NumericBuffer<T>) -> Self {
        debug_assert_eq!(data.len(), R * C);
        Self { data }
    }

    pub fn nrows(&self) -> usize {
        R
    }

    pub fn ncols(&self) -> usize {
        C
    }

    pub fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn buffer(&self) -> &NumericBuffer<T> {
        &self.data
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * C + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize> {
        if row >= R {
            return Err(MathError::OutOfRange {
                axis: "row",
                index: row,
                bound: R,
            });
        }
        if col >= C {
            return Err(MathError::OutOfRange {
                axis: "column",
                index: col,
                bound: C,
            });
        }
        Ok(self.offset(row, col))
    }

    /// Bounds-checked element access.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        let offset = self.check(row, col)?;
        Ok(&self.data[offset])
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.check(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Row `row` as a stride-1 view.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`. Use [`Matrix::at`] for checked element access.
    pub fn row(&self, row: usize) -> Strided<'_, T> {
        assert!(row < R, "row index out of bounds");
        self.data.slice(self.offset(row, 0), C, 1)
    }

    /// Column `col` as a view with stride `C`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn column(&self, col: usize) -> Strided<'_, T> {
        assert!(col < C, "column index out of bounds");
        self.data.slice(col, R, C)
    }
}

impl<const R: usize, const C: usize, T: Scalar> Matrix<R, C, T> {
    pub fn zeros() -> Self {
        Self {
            data: NumericBuffer::zeros(R * C),
        }
    }

    /// Build from a nested literal: exactly `R` rows of exactly `C` elements.
    ///
    /// The whole literal is validated before any element is copied.
    pub fn from_rows<Row: AsRef<[T]>>(rows: &[Row]) -> Result<Self> {
        if rows.len() != R {
            log::debug!("rejecting {} rows for a {}x{} matrix", rows.len(), R, C);
            return Err(MathError::ShapeMismatch {
                rows: R,
                cols: C,
                found: format!("{} rows", rows.len()),
            });
        }
        if let Some((idx, len)) = rows
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != C)
        {
            log::debug!(
                "rejecting row {} of length {} for a {}x{} matrix",
                idx,
                len,
                R,
                C
            );
            return Err(MathError::ShapeMismatch {
                rows: R,
                cols: C,
                found: format!("row {} with {} elements", idx, len),
            });
        }

        let mut data = Vec::with_capacity(R * C);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            data: NumericBuffer::from_vec(data),
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..R).map(|i| self.row(i).to_vec()).collect()
    }

    /// Fixed-width text rendering, one line per row.
    pub fn dump(&self, style: &DumpStyle) -> String {
        let mut out = String::new();
        for i in 0..R {
            for value in self.row(i).iter() {
                out.push_str(&style.cell(value));
            }
            out.push('\n');
        }
        out
    }
}

impl<const R: usize, const C: usize, T: Scalar> Default for Matrix<R, C, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize, T> TryFrom<Vec<T>> for Matrix<R, C, T> {
    type Error = MathError;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::from_vec(value)
    }
}

impl<const R: usize, const C: usize, T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<R, C, T> {
    type Error = MathError;

    fn try_from(value: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(value.as_slice())
    }
}

impl<const R: usize, const C: usize, T> From<Matrix<R, C, T>> for Vec<T> {
    fn from(value: Matrix<R, C, T>) -> Self {
        value.into_vec()
    }
}

/// Linear row-major access. Only the buffer length is checked, not the shape.
impl<const R: usize, const C: usize, T> Index<usize> for Matrix<R, C, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<usize> for Matrix<R, C, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for Matrix<R, C, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for Matrix<R, C, T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<const R: usize, const C: usize, T: Scalar> fmt::Display for Matrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(&DumpStyle::default()))
    }
}

impl<const R: usize, const C: usize, T: Serialize> Serialize for Matrix<R, C, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let data = self.data.as_slice();
        let mut seq = serializer.serialize_seq(Some(R))?;
        for i in 0..R {
            seq.serialize_element(&data[i * C..(i + 1) * C])?;
        }
        seq.end()
    }
}

impl<'de, const R: usize, const C: usize, T> Deserialize<'de> for Matrix<R, C, T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Self::from_rows(rows.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_row_major() {
        let m = Matrix::<2, 3, i32>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m[5], 6);
        assert_eq!(m.row(1).to_vec(), vec![4, 5, 6]);
        assert_eq!(m.column(2).to_vec(), vec![3, 6]);
    }

    #[test]
    fn out_of_range_reports_axis() {
        let m = Matrix::<2, 3, i32>::zeros();
        assert_eq!(
            m.at(2, 0),
            Err(MathError::OutOfRange {
                axis: "row",
                index: 2,
                bound: 2
            })
        );
        assert_eq!(
            m.at(0, 3),
            Err(MathError::OutOfRange {
                axis: "column",
                index: 3,
                bound: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn row_past_last_panics() {
        let m = Matrix::<2, 3, i32>::zeros();
        let _ = m.row(2);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn column_past_last_panics() {
        let m = Matrix::<2, 3, i32>::zeros();
        let _ = m.column(3);
    }

    #[test]
    fn dump_uses_fixed_width_columns() {
        let m = Matrix::<2, 2, i32>::from_rows(&[[1, -2], [30, 4]]).unwrap();
        let style = DumpStyle::new(4, None);
        assert_eq!(m.dump(&style), "   1  -2\n  30   4\n");

        let f = Matrix::<1, 2, f64>::from_rows(&[[0.5, 2.0]]).unwrap();
        assert_eq!(f.dump(&DumpStyle::new(6, Some(2))), "  0.50  2.00\n");
    }
}
