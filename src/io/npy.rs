//! NumPy `.npy` reader for 1-D and 2-D `f64` arrays.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::{Array1, Array2, ArrayD, Axis};
use ndarray_npy::{ReadNpyError, ReadNpyExt};

use crate::error::LoadUnavailable;

/// Outcome of [`read_mat`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedArray {
    Vector(Array1<f64>),
    Matrix(Array2<f64>),
    Absent(LoadUnavailable),
}

impl LoadedArray {
    pub fn is_present(&self) -> bool {
        !matches!(self, LoadedArray::Absent(_))
    }

    pub fn ndim(&self) -> Option<usize> {
        match self {
            LoadedArray::Vector(_) => Some(1),
            LoadedArray::Matrix(_) => Some(2),
            LoadedArray::Absent(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Array1<f64>> {
        match self {
            LoadedArray::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<Array2<f64>> {
        match self {
            LoadedArray::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Present arrays as a 2-D matrix; a vector becomes a single column.
    pub fn into_columns(self) -> Result<Array2<f64>, LoadUnavailable> {
        match self {
            LoadedArray::Vector(v) => Ok(v.insert_axis(Axis(1))),
            LoadedArray::Matrix(m) => Ok(m),
            LoadedArray::Absent(reason) => Err(reason),
        }
    }
}

pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Load a 1-D or 2-D `f64` array from an `.npy` file.
///
/// A missing file or an array of any other rank yields
/// [`LoadedArray::Absent`] and logs the reason. Errors raised while decoding
/// the file itself are returned as `Err`.
pub fn read_mat<P: AsRef<Path>>(path: P) -> Result<LoadedArray, ReadNpyError> {
    let path = path.as_ref();
    if !file_exists(path) {
        let reason = LoadUnavailable::Missing(path.to_path_buf());
        log::error!("{}", reason);
        return Ok(LoadedArray::Absent(reason));
    }

    let reader = BufReader::new(File::open(path)?);
    let array = ArrayD::<f64>::read_npy(reader)?;

    // logical (row-major) order regardless of how the file stores it
    let buffer: Vec<f64> = array.iter().copied().collect();

    let loaded = match *array.shape() {
        [_] => LoadedArray::Vector(Array1::from_vec(buffer)),
        [n, m] => LoadedArray::Matrix(Array2::from_shape_fn((n, m), |(i, j)| buffer[i * m + j])),
        _ => {
            let reason = LoadUnavailable::UnsupportedRank(array.ndim());
            log::error!("{}", reason);
            return Ok(LoadedArray::Absent(reason));
        }
    };

    log::debug!(
        "Loaded {}-D array of shape {:?} from {}",
        array.ndim(),
        array.shape(),
        path.display()
    );
    Ok(loaded)
}
