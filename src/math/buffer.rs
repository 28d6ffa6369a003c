use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::math::scalar::Scalar;

/// Owned, contiguous run of scalars backing every matrix and vector.
///
/// The buffer never grows in place: length changes go through
/// [`inserted`](NumericBuffer::inserted) and [`removed`](NumericBuffer::removed),
/// which build a fresh buffer of the exact target length.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericBuffer<T> {
    data: Vec<T>,
}

impl<T> NumericBuffer<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow `count` elements starting at `start`, `stride` apart.
    ///
    /// # Panics
    ///
    /// Panics if the last element of the view lies past the end of the
    /// buffer, including when its offset does not fit in `usize`.
    pub fn slice(&self, start: usize, count: usize, stride: usize) -> Strided<'_, T> {
        if count > 0 {
            assert!(
                stride > 0 || count == 1,
                "strided view with zero stride must hold a single element"
            );
            let last = (count - 1)
                .checked_mul(stride)
                .and_then(|offset| offset.checked_add(start));
            match last {
                Some(last) => assert!(
                    last < self.data.len(),
                    "strided view ends at {} but buffer length is {}",
                    last,
                    self.data.len()
                ),
                None => panic!(
                    "strided view ends past usize::MAX but buffer length is {}",
                    self.data.len()
                ),
            }
        }
        Strided {
            data: &self.data,
            start,
            count,
            stride,
        }
    }
}

impl<T: Scalar> NumericBuffer<T> {
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![T::zero(); len])
    }

    fn zip_with<F>(&self, other: &Self, op: &str, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        assert_eq!(
            self.len(),
            other.len(),
            "elementwise {} requires buffers of equal length",
            op
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect::<Vec<T>>()
            .into()
    }

    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    pub fn abs_diff(&self, other: &Self) -> Self {
        self.zip_with(other, "abs_diff", |a, b| a.distance(b))
    }

    pub fn scale(&self, factor: T) -> Self {
        self.data.iter().map(|&v| v * factor).collect::<Vec<T>>().into()
    }

    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Same length and every element pair satisfies [`Scalar::approx_eq`].
    pub fn all_close(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| a.approx_eq(b))
    }

    /// New buffer of `len + 1` elements with `value` placed at `index`.
    pub fn inserted(&self, index: usize, value: T) -> Self {
        assert!(index <= self.len(), "insert position {} past end", index);
        let mut data = Vec::with_capacity(self.len() + 1);
        data.extend_from_slice(&self.data[..index]);
        data.push(value);
        data.extend_from_slice(&self.data[index..]);
        Self::from_vec(data)
    }

    /// New buffer of `len - 1` elements without the one at `index`.
    pub fn removed(&self, index: usize) -> Self {
        assert!(index < self.len(), "remove position {} past end", index);
        let mut data = Vec::with_capacity(self.len() - 1);
        data.extend_from_slice(&self.data[..index]);
        data.extend_from_slice(&self.data[index + 1..]);
        Self::from_vec(data)
    }
}

impl<T> Default for NumericBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for NumericBuffer<T> {
    fn from(value: Vec<T>) -> Self {
        NumericBuffer::from_vec(value)
    }
}

impl<T> From<NumericBuffer<T>> for Vec<T> {
    fn from(value: NumericBuffer<T>) -> Self {
        value.data
    }
}

impl<T> Index<usize> for NumericBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for NumericBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

/// Non-owning `(start, count, stride)` view into a [`NumericBuffer`].
///
/// A matrix row is a view with stride 1, a column one with stride equal to
/// the row length.
#[derive(Clone, Copy, Debug)]
pub struct Strided<'a, T> {
    data: &'a [T],
    start: usize,
    count: usize,
    stride: usize,
}

impl<'a, T> Strided<'a, T> {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, k: usize) -> Option<&'a T> {
        if k < self.count {
            Some(&self.data[self.start + k * self.stride])
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let (data, start, stride) = (self.data, self.start, self.stride);
        (0..self.count).map(move |k| &data[start + k * stride])
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T: Scalar> Strided<'a, T> {
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Sum of pairwise products of two views of equal length.
    pub fn dot(&self, other: &Strided<'_, T>) -> T {
        assert_eq!(
            self.len(),
            other.len(),
            "dot product requires views of equal length"
        );
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> NumericBuffer<i32> {
        // 3 x 4, row-major
        NumericBuffer::from_vec((1..=12).collect())
    }

    #[test]
    fn row_and_column_views() {
        let buf = grid();
        assert_eq!(buf.slice(4, 4, 1).to_vec(), vec![5, 6, 7, 8]);
        assert_eq!(buf.slice(1, 3, 4).to_vec(), vec![2, 6, 10]);
        assert_eq!(buf.slice(3, 3, 4).sum(), 4 + 8 + 12);
    }

    #[test]
    fn empty_view_is_allowed_anywhere() {
        let buf: NumericBuffer<i32> = NumericBuffer::new();
        let view = buf.slice(0, 0, 1);
        assert!(view.is_empty());
        assert_eq!(view.sum(), 0);
        assert!(view.get(0).is_none());
    }

    #[test]
    #[should_panic(expected = "strided view ends at")]
    fn view_past_end_panics() {
        let buf = grid();
        let _ = buf.slice(2, 3, 5);
    }

    #[test]
    #[should_panic(expected = "strided view ends past usize::MAX")]
    fn view_with_overflowing_stride_panics() {
        let buf = NumericBuffer::from_vec(vec![10, 20, 30, 40]);
        let _ = buf.slice(1, 2, usize::MAX);
    }

    #[test]
    #[should_panic(expected = "strided view ends past usize::MAX")]
    fn view_with_overflowing_start_panics() {
        let buf = NumericBuffer::from_vec(vec![10, 20, 30, 40]);
        let _ = buf.slice(usize::MAX, 2, 1);
    }

    #[test]
    fn dot_of_row_and_column() {
        let buf = grid();
        let row = buf.slice(0, 3, 1);
        let col = buf.slice(0, 3, 4);
        assert_eq!(row.dot(&col), 1 + 10 + 27);
    }

    #[test]
    fn elementwise_arithmetic() {
        let a = NumericBuffer::from_vec(vec![1u32, 5, 9]);
        let b = NumericBuffer::from_vec(vec![4u32, 2, 9]);
        assert_eq!(a.add(&b).into_vec(), vec![5, 7, 18]);
        assert_eq!(a.abs_diff(&b).into_vec(), vec![3, 3, 0]);
        assert_eq!(a.scale(3).into_vec(), vec![3, 15, 27]);
        assert_eq!(a.sum(), 15);
        assert_eq!(b.sub(&NumericBuffer::from_vec(vec![1, 1, 1])).into_vec(), vec![3, 1, 8]);
    }

    #[test]
    fn abs_diff_saturates_at_signed_extremes() {
        let lo = NumericBuffer::from_vec(vec![i8::MIN, -3]);
        let hi = NumericBuffer::from_vec(vec![i8::MAX, 4]);
        assert_eq!(lo.abs_diff(&hi).into_vec(), vec![i8::MAX, 7]);
        assert_eq!(hi.abs_diff(&lo).into_vec(), vec![i8::MAX, 7]);
    }

    #[test]
    fn insert_and_remove_allocate_exact_length() {
        let buf = NumericBuffer::from_vec(vec![1.0f64, 2.0, 3.0]);
        let grown = buf.inserted(1, 9.0);
        assert_eq!(grown.as_slice(), &[1.0, 9.0, 2.0, 3.0]);
        assert_eq!(grown.len(), 4);
        let shrunk = grown.removed(0);
        assert_eq!(shrunk.as_slice(), &[9.0, 2.0, 3.0]);
        assert!(buf.all_close(&shrunk.inserted(0, 1.0).removed(1)));
    }

    #[test]
    fn all_close_requires_equal_length() {
        let a = NumericBuffer::from_vec(vec![1.0f32, 2.0]);
        let b = NumericBuffer::from_vec(vec![1.0f32, 2.0, 3.0]);
        assert!(!a.all_close(&b));
    }
}
