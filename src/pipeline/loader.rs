//! Dataset loader for CSV and Parquet exports

use anyhow::{Context, Result};
use console::style;
use polars::prelude::*;
use std::path::Path;

use crate::utils::{finish_loading, loading_spinner};

/// Load an accident dataset (CSV or Parquet based on extension) into memory.
///
/// # Arguments
/// * `path` - File to read
/// * `infer_schema_length` - Rows used for CSV type inference; 0 scans the whole file
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let spinner = loading_spinner(path);

    let lf = match extension.as_str() {
        "csv" => {
            let schema_length = if infer_schema_length == 0 {
                None
            } else {
                Some(infer_schema_length)
            };
            LazyCsvReader::new(path)
                .with_infer_schema_length(schema_length)
                .finish()
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        }
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => {
            spinner.finish_and_clear();
            anyhow::bail!(
                "Unsupported file format: {}. Supported formats: csv, parquet",
                extension
            )
        }
    };

    let df = lf
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    finish_loading(&spinner, df.height(), df.width());

    Ok(df)
}

/// Display row/column counts and estimated memory of a loaded table
pub fn display_dataset_stats(df: &DataFrame) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
}
