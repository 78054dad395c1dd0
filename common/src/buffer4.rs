use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

/// Dense 4-D buffer addressed by `(x, y, z, t)`.
///
/// Storage is x-fastest: `((t * depth + z) * height + y) * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer4<T> {
    cells: Vec<T>,
    dims: [usize; 4],
}

impl<T> Buffer4<T> {
    pub fn new(dims: [usize; 4], cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            cell_count(dims),
            "cells length must equal the product of dims"
        );
        Self { cells, dims }
    }

    #[inline]
    pub fn dims(&self) -> [usize; 4] {
        self.dims
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize, t: usize) -> usize {
        let [w, h, d, _] = self.dims;
        debug_assert!(x < w && y < h && z < d && t < self.dims[3]);
        ((t * d + z) * h + y) * w + x
    }

    /// Inverse of [`Buffer4::index`].
    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize, usize, usize) {
        let [w, h, d, _] = self.dims;
        let x = idx % w;
        let rest = idx / w;
        let y = rest % h;
        let rest = rest / h;
        (x, y, rest % d, rest / d)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize, t: usize) -> &T {
        &self.cells[self.index(x, y, z, t)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize, z: usize, t: usize) -> &mut T {
        let idx = self.index(x, y, z, t);
        &mut self.cells[idx]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Builds a buffer of the same shape by mapping every cell.
    pub fn map<U, F>(&self, f: F) -> Buffer4<U>
    where
        F: FnMut(&T) -> U,
    {
        Buffer4 {
            cells: self.cells.iter().map(f).collect(),
            dims: self.dims,
        }
    }
}

impl<T: Clone> Buffer4<T> {
    pub fn new_filled(dims: [usize; 4], value: T) -> Self {
        Self {
            cells: vec![value; cell_count(dims)],
            dims,
        }
    }
}

fn cell_count(dims: [usize; 4]) -> usize {
    dims.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .expect("product of dims overflows usize")
}

impl<T> Index<(usize, usize, usize, usize)> for Buffer4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y, z, t): (usize, usize, usize, usize)) -> &Self::Output {
        self.get(x, y, z, t)
    }
}

impl<T> IndexMut<(usize, usize, usize, usize)> for Buffer4<T> {
    #[inline]
    fn index_mut(&mut self, (x, y, z, t): (usize, usize, usize, usize)) -> &mut Self::Output {
        self.get_mut(x, y, z, t)
    }
}

impl<T> Index<usize> for Buffer4<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}

impl<T> IndexMut<usize> for Buffer4<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.cells[idx]
    }
}

impl<T> Deref for Buffer4<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl<T> DerefMut for Buffer4<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cells
    }
}

impl<'a, T> IntoIterator for &'a Buffer4<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<T> From<Buffer4<T>> for Vec<T> {
    #[inline]
    fn from(buffer: Buffer4<T>) -> Self {
        buffer.cells
    }
}
