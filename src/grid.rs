//! `FlatGrid`: a `height x width` grid stored row-major in one `Vec`.
//!
//! The element at `(row, col)` lives at offset `row * width + col`. The
//! backing vector always holds exactly `height * width` elements.

use std::{
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::error::{GridError, GridResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlatGrid<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

/// `height * width`, panicking like `Vec` does when the count cannot exist.
fn area(height: usize, width: usize) -> usize {
    match height.checked_mul(width) {
        Some(len) => len,
        None => panic!("capacity overflow: {height}x{width} grid"),
    }
}

impl<T> Default for FlatGrid<T> {
    fn default() -> Self {
        Self {
            height: 0,
            width: 0,
            data: Vec::new(),
        }
    }
}

impl<T> FlatGrid<T> {
    /// A grid with every element set to `T::default()`.
    ///
    /// # Panics
    /// If `height * width` overflows `usize`.
    pub fn new(height: usize, width: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(height, width, T::default())
    }

    pub fn filled(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            height,
            width,
            data: vec![value; area(height, width)],
        }
    }

    /// Builds a grid from exactly `height * width` elements in row-major
    /// order. The iterator is drained before its length is checked; too few
    /// or too many elements both fail and no grid is produced.
    pub fn from_iter_exact<I>(height: usize, width: usize, iter: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let len = area(height, width);
        let iter = iter.into_iter();
        // capacity follows the iterator, never the claimed dimensions
        let mut data = Vec::with_capacity(iter.size_hint().0.min(len));
        data.extend(iter);
        Self::from_vec(height, width, data)
    }

    /// Wraps `data` without copying. The vector is dropped on a length
    /// mismatch; use [`FlatGrid::take_from`] to keep it.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> GridResult<Self> {
        Self::check_len(height, width, data.len())?;
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Moves the contents of `source` into a new grid, leaving `source`
    /// empty. The length is validated first: on a mismatch `source` is not
    /// touched.
    pub fn take_from(height: usize, width: usize, source: &mut Vec<T>) -> GridResult<Self> {
        Self::check_len(height, width, source.len())?;
        Ok(Self {
            height,
            width,
            data: std::mem::take(source),
        })
    }

    fn check_len(height: usize, width: usize, actual: usize) -> GridResult<()> {
        if actual != area(height, width) {
            log::debug!("rejecting {actual} elements for a {height}x{width} grid");
            return Err(GridError::length_mismatch(height, width, actual));
        }
        Ok(())
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of elements, always `height * width`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.height {
            return Err(GridError::RowOutOfRange {
                row,
                height: self.height,
            });
        }
        if col >= self.width {
            return Err(GridError::ColumnOutOfRange {
                col,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Bounds-checked access. The row is validated before the column.
    pub fn at(&self, row: usize, col: usize) -> GridResult<&T> {
        let idx = self.offset(row, col)?;
        Ok(&self.data[idx])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> GridResult<&mut T> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.at(row, col).ok()
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.at_mut(row, col).ok()
    }

    /// Element access with no validation at all.
    ///
    /// # Safety
    /// `row * width + col` must be less than `len()`. Anything else is
    /// undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        self.data.get_unchecked(row * self.width + col)
    }

    /// # Safety
    /// See [`FlatGrid::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = row * self.width + col;
        self.data.get_unchecked_mut(idx)
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

    /// Row-major iteration over every element.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// One slice per row, `height` of them even when `width == 0`.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            data: &self.data,
            width: self.width,
            remaining: self.height,
        }
    }

    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        RowsMut {
            data: &mut self.data,
            width: self.width,
            remaining: self.height,
        }
    }

    /// Resizes the backing vector to `new_height * new_width`, keeping the
    /// existing linear prefix and cloning `value` into any new slots.
    ///
    /// This is a flat resize, not a 2-D reshape: when the width changes,
    /// existing elements shift between rows.
    pub fn resize(&mut self, new_height: usize, new_width: usize, value: T)
    where
        T: Clone,
    {
        let len = area(new_height, new_width);
        log::trace!(
            "resizing grid {}x{} -> {new_height}x{new_width}",
            self.height,
            self.width
        );
        self.data.resize(len, value);
        self.height = new_height;
        self.width = new_width;
    }

    pub fn resize_with<F>(&mut self, new_height: usize, new_width: usize, f: F)
    where
        F: FnMut() -> T,
    {
        let len = area(new_height, new_width);
        log::trace!(
            "resizing grid {}x{} -> {new_height}x{new_width}",
            self.height,
            self.width
        );
        self.data.resize_with(len, f);
        self.height = new_height;
        self.width = new_width;
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Exchanges dimensions and storage with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

/// Unchecked row access: `grid[row][col]`. No grid-level validation; an
/// out-of-range row or column panics in slice indexing.
impl<T> Index<usize> for FlatGrid<T> {
    type Output = [T];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }
}

impl<T> IndexMut<usize> for FlatGrid<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }
}

/// Unchecked coordinate access: only the linear offset is validated, so a
/// column past `width` lands in the following row.
impl<T> Index<(usize, usize)> for FlatGrid<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[(self.width * row) + col]
    }
}

impl<T> IndexMut<(usize, usize)> for FlatGrid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[(self.width * row) + col]
    }
}

impl<'a, T> IntoIterator for &'a FlatGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FlatGrid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for FlatGrid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    data: &'a [T],
    width: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (row, rest) = self.data.split_at(self.width);
        self.data = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Rows<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (rest, row) = self.data.split_at(self.data.len() - self.width);
        self.data = rest;
        Some(row)
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}
impl<T> FusedIterator for Rows<'_, T> {}

#[derive(Debug)]
pub struct RowsMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    remaining: usize,
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let data = std::mem::take(&mut self.data);
        let (row, rest) = data.split_at_mut(self.width);
        self.data = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for RowsMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let data = std::mem::take(&mut self.data);
        let split = data.len() - self.width;
        let (rest, row) = data.split_at_mut(split);
        self.data = rest;
        Some(row)
    }
}

impl<T> ExactSizeIterator for RowsMut<'_, T> {}
impl<T> FusedIterator for RowsMut<'_, T> {}
