use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::dataframe::DataFrame;

/// Write a frame to a CSV or TSV file based on file extension.
pub fn write_csv<S, P>(frame: &DataFrame<S>, output_path: P) -> Result<()>
where
    S: fmt::Display,
    P: AsRef<Path>,
{
    let path = output_path.as_ref();
    let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    write_delimited(frame, BufWriter::new(file), delimiter)
        .with_context(|| format!("Failed to write frame to {:?}", path))
}

/// Write a frame as comma-separated text into any writer.
pub fn write_csv_to<S, W>(frame: &DataFrame<S>, writer: W) -> Result<()>
where
    S: fmt::Display,
    W: Write,
{
    write_delimited(frame, writer, b',')
}

fn write_delimited<S, W>(frame: &DataFrame<S>, writer: W, delimiter: u8) -> Result<()>
where
    S: fmt::Display,
    W: Write,
{
    if frame.ncols() == 0 {
        log::warn!("Writing a frame without columns; output will be empty");
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    if frame.ncols() > 0 {
        writer.write_record(frame.columns())?;
    }
    for row in frame.data().rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
