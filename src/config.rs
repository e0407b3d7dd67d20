use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Layout knobs for rendering a [`DataFrame`](crate::dataframe::DataFrame).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits after the decimal point for every cell.
    pub precision: usize,
    /// Lower bound on the width of the row-index gutter.
    pub min_index_width: usize,
    /// Extra width added to every data column.
    pub padding: usize,
    /// When set and exceeded, only the head and tail rows are printed.
    pub max_rows: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 6,
            min_index_width: 5,
            padding: 2,
            max_rows: None,
        }
    }
}

impl FormatOptions {
    pub fn new(precision: usize, max_rows: Option<usize>) -> Self {
        Self {
            precision,
            max_rows,
            ..Default::default()
        }
    }

    /// Read options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read format config: {}", path.as_ref().display()))?;
        let options: FormatOptions = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse format config: {}", path.as_ref().display()))?;
        Ok(options)
    }
}
