//! File IO: `.npy` loading and CSV export.

pub mod export;
pub mod npy;

pub use export::{write_csv, write_csv_to};
pub use npy::{file_exists, read_mat, LoadedArray};
