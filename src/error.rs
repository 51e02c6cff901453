use std::result::Result;
use thiserror::Error;

/// Every failure a grid can report. All variants describe an index or a
/// length falling outside what the grid's dimensions allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row index {row} out of range for height {height}")]
    RowOutOfRange { row: usize, height: usize },
    #[error("column index {col} out of range for width {width}")]
    ColumnOutOfRange { col: usize, width: usize },
    #[error("a {height}x{width} grid needs {expected} elements, got {actual}")]
    LengthMismatch {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },
}

impl GridError {
    /// Always true; lets callers treat the whole enum as one error kind.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RowOutOfRange { .. } | Self::ColumnOutOfRange { .. } | Self::LengthMismatch { .. }
        )
    }

    pub(crate) fn length_mismatch(height: usize, width: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            height,
            width,
            expected: height * width,
            actual,
        }
    }
}

pub type GridResult<T> = Result<T, GridError>;
