//! `CheckedGrid`: a [`FlatGrid`] whose indexing is always bounds-checked.
//!
//! Two-step access goes through a row accessor, `grid.row(r).at(c)`, which
//! routes both indices through [`FlatGrid::at`]. The accessor borrows the
//! grid, so it cannot outlive it or survive a resize.

use std::ops::{Index, IndexMut};

use crate::{
    error::GridResult,
    grid::{FlatGrid, Rows, RowsMut},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckedGrid<T> {
    inner: FlatGrid<T>,
}

impl<T> Default for CheckedGrid<T> {
    fn default() -> Self {
        Self {
            inner: FlatGrid::default(),
        }
    }
}

/// Row `row` of a shared grid. Only [`CheckedGrid::row`] creates one; its
/// single operation consumes it.
#[derive(Debug)]
pub struct RowAccessor<'a, T> {
    grid: &'a FlatGrid<T>,
    row: usize,
}

impl<'a, T> RowAccessor<'a, T> {
    /// Same validation as `grid.at(row, col)`; the row is only checked here.
    pub fn at(self, col: usize) -> GridResult<&'a T> {
        self.grid.at(self.row, col)
    }
}

#[derive(Debug)]
pub struct RowAccessorMut<'a, T> {
    grid: &'a mut FlatGrid<T>,
    row: usize,
}

impl<'a, T> RowAccessorMut<'a, T> {
    pub fn at(self, col: usize) -> GridResult<&'a mut T> {
        self.grid.at_mut(self.row, col)
    }
}

static_assertions::assert_not_impl_any!(RowAccessor<'static, u8>: Clone, Copy);
static_assertions::assert_not_impl_any!(RowAccessorMut<'static, u8>: Clone, Copy);
static_assertions::assert_impl_all!(CheckedGrid<u8>: Send, Sync);

impl<T> CheckedGrid<T> {
    pub fn new(height: usize, width: usize) -> Self
    where
        T: Default + Clone,
    {
        FlatGrid::new(height, width).into()
    }

    pub fn filled(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        FlatGrid::filled(height, width, value).into()
    }

    pub fn from_iter_exact<I>(height: usize, width: usize, iter: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        FlatGrid::from_iter_exact(height, width, iter).map(Self::from)
    }

    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> GridResult<Self> {
        FlatGrid::from_vec(height, width, data).map(Self::from)
    }

    pub fn take_from(height: usize, width: usize, source: &mut Vec<T>) -> GridResult<Self> {
        FlatGrid::take_from(height, width, source).map(Self::from)
    }

    pub fn row(&self, row: usize) -> RowAccessor<'_, T> {
        RowAccessor {
            grid: &self.inner,
            row,
        }
    }

    pub fn row_mut(&mut self, row: usize) -> RowAccessorMut<'_, T> {
        RowAccessorMut {
            grid: &mut self.inner,
            row,
        }
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn width(&self) -> usize {
        self.inner.width()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.inner.dimensions()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn at(&self, row: usize, col: usize) -> GridResult<&T> {
        self.inner.at(row, col)
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> GridResult<&mut T> {
        self.inner.at_mut(row, col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.inner.get(row, col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.inner.get_mut(row, col)
    }

    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    pub fn rows(&self) -> Rows<'_, T> {
        self.inner.rows()
    }

    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        self.inner.rows_mut()
    }

    pub fn resize(&mut self, new_height: usize, new_width: usize, value: T)
    where
        T: Clone,
    {
        self.inner.resize(new_height, new_width, value);
    }

    pub fn resize_with<F>(&mut self, new_height: usize, new_width: usize, f: F)
    where
        F: FnMut() -> T,
    {
        self.inner.resize_with(new_height, new_width, f);
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.inner.fill(value);
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }

    pub fn as_flat(&self) -> &FlatGrid<T> {
        &self.inner
    }

    pub fn into_flat(self) -> FlatGrid<T> {
        self.inner
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T> From<FlatGrid<T>> for CheckedGrid<T> {
    fn from(inner: FlatGrid<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<CheckedGrid<T>> for FlatGrid<T> {
    fn from(grid: CheckedGrid<T>) -> Self {
        grid.inner
    }
}

/// Checked coordinate access; panics with the [`GridError`] message when
/// out of range.
///
/// [`GridError`]: crate::GridError
impl<T> Index<(usize, usize)> for CheckedGrid<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.inner.at(row, col) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for CheckedGrid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.inner.at_mut(row, col) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a CheckedGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CheckedGrid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for CheckedGrid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
