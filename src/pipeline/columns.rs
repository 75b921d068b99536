//! Column names expected in the accident dataset

use polars::prelude::*;

use crate::error::AnalysisError;

pub const EVENT_ID: &str = "Event.Id";
pub const FATAL_INJURIES: &str = "Total.Fatal.Injuries";
pub const TOTAL_INJURIES: &str = "Total_Injuries";
pub const FATALITY_RATE: &str = "Fatality_Rate";
pub const MAKE_AND_MODEL: &str = "Make_and_Model";
pub const WEATHER_CONDITION: &str = "Weather.Condition";
pub const FLIGHT_PHASE: &str = "Broad.phase.of.flight";
pub const YEAR: &str = "Year";
pub const OPERATION_CATEGORY: &str = "Operation_Category";
pub const PURPOSE_OF_FLIGHT: &str = "Purpose.of.flight";

/// Fail with [`AnalysisError::MissingColumn`] on the first absent column.
pub fn require_columns(
    df: &DataFrame,
    columns: &[&str],
    operation: &'static str,
) -> Result<(), AnalysisError> {
    let present = df.get_column_names();
    match columns
        .iter()
        .find(|name| !present.iter().any(|p| p.as_str() == **name))
    {
        Some(missing) => Err(AnalysisError::MissingColumn {
            column: missing.to_string(),
            operation,
        }),
        None => Ok(()),
    }
}
