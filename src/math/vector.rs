use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::config::DumpStyle;
use crate::error::{MathError, Result};
use crate::math::buffer::NumericBuffer;
use crate::math::scalar::Scalar;

/// Growable one-dimensional container.
///
/// Every mutator builds a new buffer of exactly the new length and swaps it
/// in only after the copy is complete, so a vector is never observed in a
/// half-updated state. There is no spare capacity: each push or pop costs
/// O(len).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: NumericBuffer<T>,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self {
            data: NumericBuffer::new(),
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_buffer(NumericBuffer::from_vec(data))
    }

    /// Any buffer length is a valid vector size.
    pub fn from_buffer(data: NumericBuffer<T>) -> Self {
        Self { data }
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

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.as_slice().to_vec()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(MathError::OutOfRange {
                axis: "element",
                index,
                bound: self.len(),
            });
        }
        Ok(())
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.check(index)?;
        Ok(&self.data[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check(index)?;
        Ok(&mut self.data[index])
    }
}

impl<T: Scalar> Vector<T> {
    pub fn zeros(len: usize) -> Self {
        Self::from_buffer(NumericBuffer::zeros(len))
    }

    fn replace(&mut self, data: NumericBuffer<T>) {
        log::trace!("reallocated vector buffer {} -> {}", self.len(), data.len());
        self.data = data;
    }

    pub fn push_back(&mut self, value: T) {
        let data = self.data.inserted(self.len(), value);
        self.replace(data);
    }

    pub fn push_front(&mut self, value: T) {
        let data = self.data.inserted(0, value);
        self.replace(data);
    }

    /// Remove and return the last element. An empty vector is left as is.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = *self.data.as_slice().last()?;
        let data = self.data.removed(self.len() - 1);
        self.replace(data);
        Some(last)
    }

    /// Remove and return the first element. An empty vector is left as is.
    pub fn pop_front(&mut self) -> Option<T> {
        let first = *self.data.as_slice().first()?;
        let data = self.data.removed(0);
        self.replace(data);
        Some(first)
    }

    pub fn dump(&self, style: &DumpStyle) -> String {
        self.data.iter().map(|v| style.cell(v)).collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data.into_vec()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

/// Unchecked by the vector itself; indexing past the end panics in the
/// underlying slice.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(&DumpStyle::default()))
    }
}
