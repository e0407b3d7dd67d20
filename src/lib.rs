//! npframe: labeled dense matrices and `.npy` loading on top of `ndarray`.
//!
//! [`DataFrame`] pairs a 2-D `ndarray` matrix with column names and prints as
//! an aligned table. [`read_mat`] loads a 1-D or 2-D `f64` array from a NumPy
//! `.npy` file and reports a missing file or unsupported rank as an explicit
//! [`LoadedArray::Absent`] value instead of an error.
pub mod config;
pub mod dataframe;
pub mod error;
pub mod io;

pub use config::FormatOptions;
pub use dataframe::DataFrame;
pub use error::{LoadUnavailable, ShapeError};
pub use io::{file_exists, read_mat, write_csv, LoadedArray};
