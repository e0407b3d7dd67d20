use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Column names do not line up with the columns of the data matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    pub(crate) data_cols: usize,
    pub(crate) names: usize,
}

impl ShapeError {
    pub fn data_cols(&self) -> usize {
        self.data_cols
    }

    pub fn names(&self) -> usize {
        self.names
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number of columns in data matrix ({}) must match number of column names ({})",
            self.data_cols, self.names
        )
    }
}

impl Error for ShapeError {}

/// Reason a load produced no array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadUnavailable {
    /// The path does not name an existing file.
    Missing(PathBuf),
    /// The stored array has a rank other than 1 or 2.
    UnsupportedRank(usize),
}

impl fmt::Display for LoadUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadUnavailable::Missing(path) => {
                write!(f, "File: {} does not exist", path.display())
            }
            LoadUnavailable::UnsupportedRank(ndim) => write!(
                f,
                "array in file has: {} dimensions, currently read_mat() only supports 1 or 2",
                ndim
            ),
        }
    }
}

impl Error for LoadUnavailable {}
