//! Labeled dense matrix with a pandas-like text rendering.
//!
//! A [`DataFrame`] pairs an `ndarray::Array2` with one name per column. The
//! names are fixed at construction; cell values can be edited in place
//! through [`DataFrame::data_mut`].
use std::fmt::{self, Write};

use ndarray::Array2;

use crate::config::FormatOptions;
use crate::error::ShapeError;

#[derive(Clone, Debug, PartialEq)]
pub struct DataFrame<S = f64> {
    data: Array2<S>,
    columns: Vec<String>,
}

impl<S: Default> DataFrame<S> {
    /// A frame with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            data: Array2::default((0, 0)),
            columns: Vec::new(),
        }
    }

    /// A frame with the given column names and no rows.
    pub fn with_columns<I, T>(columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        Self {
            data: Array2::default((0, columns.len())),
            columns,
        }
    }
}

impl<S: Default> Default for DataFrame<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> DataFrame<S> {
    /// Wrap `data`, naming its columns in order.
    ///
    /// Fails when the number of names differs from `data.ncols()`.
    pub fn new<I, T>(data: Array2<S>, columns: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if data.ncols() != columns.len() {
            return Err(ShapeError {
                data_cols: data.ncols(),
                names: columns.len(),
            });
        }
        Ok(Self { data, columns })
    }

    pub fn data(&self) -> &Array2<S> {
        &self.data
    }

    /// Mutable access to the cells. Changing the column count here leaves the
    /// names out of sync; the frame does not check again.
    pub fn data_mut(&mut self) -> &mut Array2<S> {
        &mut self.data
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn into_parts(self) -> (Array2<S>, Vec<String>) {
        (self.data, self.columns)
    }
}

impl<S: fmt::Display> DataFrame<S> {
    /// Render with the default layout, same as `to_string()`.
    pub fn to_text(&self) -> String {
        self.to_text_with(&FormatOptions::default())
    }

    pub fn to_text_with(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out, options);
        out
    }

    /// Write the table into `out`.
    ///
    /// Layout: a header of right-aligned column names behind a blank index
    /// gutter, a dashed separator, one line per row, then a blank line and
    /// `[R rows x C columns]`. A frame without columns renders as
    /// `Empty DataFrame`.
    pub fn render<W: Write>(&self, out: &mut W, options: &FormatOptions) -> fmt::Result {
        if self.ncols() == 0 {
            return out.write_str("Empty DataFrame");
        }

        let precision = options.precision;
        let rows = visible_rows(self.nrows(), options.max_rows);

        let mut widths: Vec<usize> = self.columns.iter().map(|name| name.chars().count()).collect();
        for &row in rows.iter().flatten() {
            for (col, width) in widths.iter_mut().enumerate() {
                let len = format!("{:.*}", precision, self.data[(row, col)]).chars().count();
                *width = (*width).max(len);
            }
        }
        for width in widths.iter_mut() {
            *width += options.padding;
        }

        // digits of the last index; an empty frame counts as index 0
        let last_index = self.nrows().saturating_sub(1);
        let index_width = options
            .min_index_width
            .max(last_index.to_string().len() + 2);

        write!(out, "{:w$}", "", w = index_width)?;
        for (name, &width) in self.columns.iter().zip(&widths) {
            write!(out, "{:>w$}", name, w = width)?;
        }
        out.write_char('\n')?;

        let rule = index_width + widths.iter().sum::<usize>();
        out.write_str(&"-".repeat(rule))?;
        out.write_char('\n')?;

        for row in &rows {
            match row {
                Some(row) => {
                    write!(out, "{:>w$} ", row, w = index_width.saturating_sub(1))?;
                    for (col, &width) in widths.iter().enumerate() {
                        write!(out, "{:>w$.p$}", self.data[(*row, col)], w = width, p = precision)?;
                    }
                }
                None => {
                    write!(out, "{:>w$} ", "...", w = index_width.saturating_sub(1))?;
                    for &width in &widths {
                        write!(out, "{:>w$}", "...", w = width)?;
                    }
                }
            }
            out.write_char('\n')?;
        }

        write!(out, "\n[{} rows x {} columns]", self.nrows(), self.ncols())
    }
}

impl<S: fmt::Display> fmt::Display for DataFrame<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &FormatOptions::default())
    }
}

/// Row indices to print, with `None` marking the elided middle.
fn visible_rows(nrows: usize, max_rows: Option<usize>) -> Vec<Option<usize>> {
    match max_rows {
        Some(max) if nrows > max => {
            let half = max / 2;
            (0..half)
                .map(Some)
                .chain(std::iter::once(None))
                .chain((nrows - half..nrows).map(Some))
                .collect()
        }
        _ => (0..nrows).map(Some).collect(),
    }
}
