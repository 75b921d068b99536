//! Missing-value filling and text standardization

use anyhow::{Context, Result};
use polars::prelude::*;

use super::columns::require_columns;
use super::quality::missing_cells;
use super::schema::TableSchema;
use crate::utils::{print_info, print_success};

/// Replacement for missing categorical cells
pub const UNKNOWN: &str = "Unknown";

/// Weather condition codes and their descriptive labels
pub const WEATHER_CODES: [(&str, &str); 3] = [
    ("VMC", "Visual Meteorological Conditions"),
    ("IMC", "Instrument Meteorological Conditions"),
    ("UNK", UNKNOWN),
];

/// Fill missing values column by column.
///
/// Numeric columns get `0` in place of nulls and, for float columns, NaN.
/// Categorical columns are stored as strings and get `"Unknown"`. The input
/// frame is left untouched.
pub fn fill_missing_values(df: &DataFrame, schema: &TableSchema) -> Result<DataFrame> {
    let (numeric, categorical) = schema.partition(df)?;

    let mut exprs: Vec<Expr> = Vec::with_capacity(df.width());
    for name in &numeric {
        let dtype = df.column(name)?.dtype();
        let zero = lit(0).cast(dtype.clone());
        let expr = match dtype {
            // NaN counts as missing in float columns
            DataType::Float32 | DataType::Float64 => {
                col(name.as_str()).fill_nan(zero.clone()).fill_null(zero)
            }
            _ => col(name.as_str()).fill_null(zero),
        };
        exprs.push(expr);
    }
    exprs.extend(categorical.iter().map(|name| {
        col(name.as_str())
            .cast(DataType::String)
            .fill_null(lit(UNKNOWN))
    }));

    let filled = df
        .clone()
        .lazy()
        .with_columns(exprs)
        .collect()
        .context("Failed to fill missing values")?;

    let mut remaining = 0;
    for column in filled.get_columns() {
        remaining += missing_cells(column)?;
    }

    print_success(&format!(
        "Filled missing values in {} numeric column(s) with 0",
        numeric.len()
    ));
    print_success(&format!(
        "Filled missing values in {} categorical column(s) with '{}'",
        categorical.len(),
        UNKNOWN
    ));
    print_info(&format!("Total remaining missing values: {}", remaining));

    Ok(filled)
}

/// Trim and title-case a text value; a missing value becomes `"Unknown"`.
pub fn standardize_text(text: Option<&str>) -> String {
    match text {
        Some(t) => title_case(t.trim()),
        None => UNKNOWN.to_string(),
    }
}

/// [`standardize_text`] for an arbitrary cell: non-string values are
/// stringified first, null and NaN count as missing.
pub fn standardize_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => standardize_text(None),
        AnyValue::String(s) => standardize_text(Some(s)),
        AnyValue::StringOwned(s) => standardize_text(Some(s.as_str())),
        AnyValue::Float64(v) if v.is_nan() => standardize_text(None),
        AnyValue::Float32(v) if v.is_nan() => standardize_text(None),
        other => standardize_text(Some(&other.to_string())),
    }
}

/// Expand a weather condition code into its descriptive label.
///
/// The code is uppercased before lookup. Unknown codes fall back to
/// [`standardize_text`] of the uppercased code, so `"xyz"` becomes `"Xyz"`.
pub fn clean_weather_condition(code: &str) -> String {
    let upper = code.to_uppercase();
    WEATHER_CODES
        .iter()
        .find(|(abbr, _)| *abbr == upper)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| standardize_text(Some(&upper)))
}

/// Return a copy of `df` with `column` passed through [`standardize_value`]
pub fn standardize_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    require_columns(df, &[column], "standardize_column")?;

    let cleaned: StringChunked = df
        .column(column)?
        .as_materialized_series()
        .iter()
        .map(|v| Some(standardize_value(&v)))
        .collect();

    let mut out = df.clone();
    out.with_column(cleaned.into_series().with_name(column.into()))?;
    Ok(out)
}

/// Return a copy of `df` with `column` passed through [`clean_weather_condition`].
/// Missing cells become `"Unknown"`.
pub fn clean_weather_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    require_columns(df, &[column], "clean_weather_column")?;

    let as_text = df.column(column)?.cast(&DataType::String)?;
    let cleaned: StringChunked = as_text
        .as_materialized_series()
        .str()?
        .iter()
        .map(|v| Some(v.map_or_else(|| UNKNOWN.to_string(), clean_weather_condition)))
        .collect();

    let mut out = df.clone();
    out.with_column(cleaned.into_series().with_name(column.into()))?;
    Ok(out)
}

/// Uppercase a letter that follows a non-letter, lowercase every other letter.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }

    out
}
