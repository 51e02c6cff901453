//! Rectangular 2-D grids backed by a single contiguous `Vec`.
//!
//! [`FlatGrid`] offers checked access through [`FlatGrid::at`] and fast,
//! unvalidated access through `grid[row][col]`. [`CheckedGrid`] holds the
//! same storage but validates every index, including the two-step
//! `grid.row(row).at(col)` form.
//!
//! ```
//! use rectangular::{CheckedGrid, FlatGrid, GridError};
//!
//! let mut grid = FlatGrid::<i32>::new(2, 3);
//! grid[1][2] = 5;
//! assert_eq!(grid.at(1, 2), Ok(&5));
//! assert_eq!(grid.at(2, 0), Err(GridError::RowOutOfRange { row: 2, height: 2 }));
//!
//! let checked = CheckedGrid::from(grid);
//! assert_eq!(checked.row(1).at(2), Ok(&5));
//! assert!(checked.row(0).at(3).is_err());
//! ```

mod checked;
mod error;
mod grid;

pub use checked::{CheckedGrid, RowAccessor, RowAccessorMut};
pub use error::{GridError, GridResult};
pub use grid::{FlatGrid, Rows, RowsMut};
