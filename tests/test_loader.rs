//! Tests for dataset loading

use avrisk::pipeline::{display_dataset_stats, load_dataset};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_csv() {
    let mut df = create_clean_accidents();
    let (_temp_dir, path) = create_temp_csv(&mut df);

    let loaded = load_dataset(&path, 100).unwrap();

    assert_eq!(loaded.shape(), df.shape());
    assert_eq!(
        strings(&loaded, "Make_and_Model"),
        strings(&df, "Make_and_Model")
    );
    assert_eq!(
        floats(&loaded, "Fatality_Rate"),
        floats(&df, "Fatality_Rate")
    );
}

#[test]
fn test_load_csv_full_schema_scan() {
    let mut df = create_clean_accidents();
    let (_temp_dir, path) = create_temp_csv(&mut df);

    let loaded = load_dataset(&path, 0).unwrap();

    assert_eq!(loaded.height(), 8);
    display_dataset_stats(&loaded);
}

#[test]
fn test_load_parquet() {
    let mut df = create_raw_accidents();
    let (_temp_dir, path) = create_temp_parquet(&mut df);

    let loaded = load_dataset(&path, 100).unwrap();

    assert!(loaded.equals_missing(&df));
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("accidents.xlsx");
    std::fs::write(&path, "not a table").unwrap();

    let err = load_dataset(&path, 100).unwrap_err();

    assert!(err.to_string().contains("Unsupported file format"));
}

#[test]
fn test_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.csv");

    assert!(load_dataset(&path, 100).is_err());
}
