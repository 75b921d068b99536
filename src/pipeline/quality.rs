//! Data quality assessment: missingness, cardinality and declared type per column

use std::collections::HashMap;

use anyhow::Result;
use console::style;
use polars::prelude::*;
use serde::Serialize;

use super::schema::{ColumnKind, TableSchema};

/// Number of sample values printed per categorical column
pub const SAMPLE_VALUE_COUNT: usize = 5;

/// Quality metrics for a single column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnQuality {
    pub name: String,
    /// Null cells, plus NaN cells in float columns
    pub missing_count: usize,
    /// Missing cells as a percentage of all rows (0.0 for an empty table)
    pub missing_pct: f64,
    /// Distinct stored values, with missing cells counted as one bucket
    pub unique_count: usize,
    pub kind: ColumnKind,
    /// Storage dtype as reported by polars
    pub dtype: String,
}

/// Read-only quality report for a whole table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub rows: usize,
    pub columns: usize,
    pub entries: Vec<ColumnQuality>,
}

impl QualityReport {
    pub fn get(&self, column: &str) -> Option<&ColumnQuality> {
        self.entries.iter().find(|e| e.name == column)
    }

    pub fn total_missing(&self) -> usize {
        self.entries.iter().map(|e| e.missing_count).sum()
    }
}

/// Assess the quality of every column in the table.
///
/// # Arguments
/// * `df` - Table to inspect
/// * `schema` - Column kinds; every column of `df` must be declared
/// * `print_samples` - Print the most frequent values of each categorical column
pub fn assess_data_quality(
    df: &DataFrame,
    schema: &TableSchema,
    print_samples: bool,
) -> Result<QualityReport> {
    let rows = df.height();
    let mut entries = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().as_str();
        let kind = schema.kind(name)?;
        let missing_count = missing_cells(column)?;

        let missing_pct = if rows == 0 {
            0.0
        } else {
            missing_count as f64 / rows as f64 * 100.0
        };

        let unique_count = if rows == 0 {
            0
        } else {
            column.as_materialized_series().n_unique()?
        };

        entries.push(ColumnQuality {
            name: name.to_string(),
            missing_count,
            missing_pct,
            unique_count,
            kind,
            dtype: column.dtype().to_string(),
        });

        if print_samples && kind == ColumnKind::Categorical {
            print_sample_values(name, &top_value_counts(column, SAMPLE_VALUE_COUNT)?);
        }
    }

    Ok(QualityReport {
        rows,
        columns: df.width(),
        entries,
    })
}

/// Missing cells of a column: nulls, plus NaN cells of a float column
pub fn missing_cells(column: &Column) -> Result<usize> {
    let nan_count = match column.dtype() {
        DataType::Float32 | DataType::Float64 => column
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .filter(|v| v.is_some_and(f64::is_nan))
            .count(),
        _ => 0,
    };
    Ok(column.null_count() + nan_count)
}

/// Most frequent non-missing values of a column, descending by frequency.
///
/// Values with equal frequency keep the order in which they first appear.
pub fn top_value_counts(column: &Column, limit: usize) -> Result<Vec<(String, usize)>> {
    let as_text = column.cast(&DataType::String)?;
    let values = as_text.as_materialized_series().str()?;

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match index.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    Ok(counts)
}

fn print_sample_values(column: &str, samples: &[(String, usize)]) {
    println!();
    println!(
        "    {} {}",
        style("Sample values for").dim(),
        style(column).cyan().bold()
    );
    if samples.is_empty() {
        println!("      {}", style("(no values)").dim());
    }
    for (value, count) in samples {
        println!("      {:<40} {}", value, style(count).yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_value_counts_orders_ties_by_first_appearance() {
        let column = Column::new(
            "Weather.Condition".into(),
            [
                Some("IMC"),
                Some("VMC"),
                None,
                Some("UNK"),
                Some("VMC"),
                Some("IMC"),
                Some("UNK"),
                Some("VMC"),
            ],
        );

        let counts = top_value_counts(&column, 5).unwrap();
        assert_eq!(
            counts,
            vec![
                ("VMC".to_string(), 3),
                ("IMC".to_string(), 2),
                ("UNK".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_missing_cells_counts_nan_in_float_columns() {
        let rate = Column::new("Fatality_Rate".into(), [Some(0.5f64), Some(f64::NAN), None]);
        assert_eq!(missing_cells(&rate).unwrap(), 2);

        let rate32 = Column::new("r".into(), [f32::NAN, 1.0]);
        assert_eq!(missing_cells(&rate32).unwrap(), 1);

        let text = Column::new("t".into(), [Some("NaN"), None]);
        assert_eq!(missing_cells(&text).unwrap(), 1);
    }

    #[test]
    fn test_top_value_counts_truncates() {
        let column = Column::new("x".into(), ["a", "b", "c", "d", "e", "f", "a"]);
        let counts = top_value_counts(&column, SAMPLE_VALUE_COUNT).unwrap();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], ("a".to_string(), 2));
        assert_eq!(counts[4], ("e".to_string(), 1));
    }
}
