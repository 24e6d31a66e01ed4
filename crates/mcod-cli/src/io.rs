//! CSV input and output for MCOD batches.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::debug;

/// Reads a CSV file with every column as text.
///
/// Code padding (`"X64 "`) and leading zeros (`"01"`) survive untouched.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), columns = df.width(), "read batch");
    Ok(df)
}

/// Writes `df` with a header row to `path`, or to stdout.
pub fn write_csv(df: &mut DataFrame, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            CsvWriter::new(file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
            debug!(path = %path.display(), rows = df.height(), "wrote batch");
        }
        None => {
            CsvWriter::new(io::stdout().lock())
                .include_header(true)
                .finish(df)
                .context("Failed to write CSV to stdout")?;
        }
    }
    Ok(())
}
