//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Raw accident records with gaps, as they come out of an NTSB export.
///
/// - `Total.Fatal.Injuries`: 2 missing of 6
/// - `Weather.Condition`: coded, mixed case, 1 missing
/// - `Purpose.of.flight`: free text with stray whitespace, 1 missing
pub fn create_raw_accidents() -> DataFrame {
    df! {
        "Event.Id" => ["E1", "E2", "E3", "E4", "E5", "E6"],
        "Make_and_Model" => [Some("cessna 172"), Some("CESSNA 172"), None, Some("piper pa-28"), Some("Piper PA-28"), Some("boeing 737")],
        "Total.Fatal.Injuries" => [Some(0.0f64), None, Some(2.0), Some(1.0), None, Some(0.0)],
        "Weather.Condition" => [Some("VMC"), Some("imc"), Some("Unk"), None, Some("vmc"), Some("VMC")],
        "Purpose.of.flight" => [Some(" personal "), Some("Instructional"), None, Some("aerial application"), Some("Business"), Some("PERSONAL")],
        "Year" => [2001i32, 2001, 2002, 2003, 2003, 2003],
    }
    .unwrap()
}

/// Cleaned accident records ready for aggregation.
///
/// Three models with 4, 3 and 1 accidents over three distinct years.
pub fn create_clean_accidents() -> DataFrame {
    df! {
        "Event.Id" => ["E1", "E2", "E3", "E4", "E5", "E6", "E7", "E8"],
        "Make_and_Model" => [
            "Cessna 172", "Cessna 172", "Cessna 172", "Cessna 172",
            "Piper Pa-28", "Piper Pa-28", "Piper Pa-28",
            "Boeing 737",
        ],
        "Total.Fatal.Injuries" => [0.0f64, 1.0, 0.0, 2.0, 1.0, 0.0, 0.0, 3.0],
        "Total_Injuries" => [1.0f64, 1.0, 0.0, 2.0, 2.0, 1.0, 0.0, 5.0],
        "Fatality_Rate" => [0.0f64, 0.5, 0.0, 1.0, 0.5, 0.0, 0.0, 0.6],
        "Weather.Condition" => [
            "Visual Meteorological Conditions", "Instrument Meteorological Conditions",
            "Visual Meteorological Conditions", "Instrument Meteorological Conditions",
            "Visual Meteorological Conditions", "Visual Meteorological Conditions",
            "Unknown", "Instrument Meteorological Conditions",
        ],
        "Broad.phase.of.flight" => [
            "Landing", "Cruise", "Landing", "Takeoff",
            "Landing", "Approach", "Landing", "Cruise",
        ],
        "Year" => [2001i32, 2001, 2002, 2003, 2002, 2003, 2003, 2001],
        "Operation_Category" => [
            "Private", "Private", "Other", "Commercial",
            "Private", "Other", "Private", "Commercial",
        ],
    }
    .unwrap()
}

/// Random cleaned table with `models` aircraft models over `years` years
pub fn create_random_accidents(rows: usize, models: usize, years: i32, seed: u64) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let ids: Vec<String> = (0..rows).map(|i| format!("EV{:06}", i)).collect();
    let model: Vec<String> = (0..rows)
        .map(|_| format!("Model {}", rng.gen_range(0..models)))
        .collect();
    let fatal: Vec<f64> = (0..rows).map(|_| rng.gen_range(0..4) as f64).collect();
    let total: Vec<f64> = fatal.iter().map(|f| f + rng.gen_range(0..3) as f64).collect();
    let rate: Vec<f64> = fatal
        .iter()
        .zip(&total)
        .map(|(f, t)| if *t > 0.0 { f / t } else { 0.0 })
        .collect();
    let category: Vec<&str> = (0..rows)
        .map(|_| ["Private", "Commercial", "Other"][rng.gen_range(0..3)])
        .collect();
    let year: Vec<i32> = (0..rows).map(|_| 1990 + rng.gen_range(0..years)).collect();

    df! {
        "Event.Id" => ids,
        "Make_and_Model" => model,
        "Total.Fatal.Injuries" => fatal,
        "Total_Injuries" => total,
        "Fatality_Rate" => rate,
        "Operation_Category" => category,
        "Year" => year,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("accidents.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("accidents.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Values of a string column
pub fn strings(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}

/// Values of a numeric column as f64
pub fn floats(df: &DataFrame, column: &str) -> Vec<f64> {
    df.column(column)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
