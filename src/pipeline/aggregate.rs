//! Grouped risk statistics over a cleaned accident table
//!
//! Every function expects the table to be cleaned already. Rows whose
//! grouping key is null are left out of that grouping; nulls in the value
//! columns are not treated specially. Required columns are checked up front
//! and a missing one fails with [`AnalysisError::MissingColumn`].
//!
//! [`AnalysisError::MissingColumn`]: crate::error::AnalysisError::MissingColumn

use anyhow::{Context, Result};
use polars::prelude::*;

use super::columns::*;
use super::stats::{percentile_ranks, round_float_columns};

/// Groups with fewer accidents are left out of the safety ranking
pub const DEFAULT_MIN_ACCIDENTS: u32 = 23;

/// Decimal places kept by the risk-factor and operational tables
pub const ROUND_DECIMALS: u32 = 3;

pub const ACCIDENT_COUNT: &str = "Accident_Count";
pub const SAFETY_SCORE: &str = "Safety_Score";
pub const ACCIDENTS_PER_YEAR: &str = "Accidents_per_Year";

const FATALITY_WEIGHT: f64 = 0.4;
const VOLUME_WEIGHT: f64 = 0.6;

/// Risk tables grouped by weather, flight phase and year
#[derive(Debug, Clone)]
pub struct RiskFactors {
    pub weather: DataFrame,
    pub phase: DataFrame,
    pub yearly: DataFrame,
}

/// Safety metrics per aircraft make and model.
///
/// Columns: `Make_and_Model`, `Accident_Count`, `Total.Fatal.Injuries`,
/// `Total_Injuries`, `Fatality_Rate` (mean) and `Safety_Score`.
///
/// `Safety_Score = Fatality_Rate * 0.4 + pct_rank(Accident_Count) * 0.6`,
/// with the percentile rank taken over the models that pass
/// `min_accidents`. The table is sorted ascending, so the models with the
/// lowest score (lower = safer under this weighting) come first.
pub fn analyze_aircraft_safety(df: &DataFrame, min_accidents: u32) -> Result<DataFrame> {
    require_columns(
        df,
        &[MAKE_AND_MODEL, EVENT_ID, FATAL_INJURIES, TOTAL_INJURIES, FATALITY_RATE],
        "analyze_aircraft_safety",
    )?;

    let mut metrics = df
        .clone()
        .lazy()
        .filter(col(MAKE_AND_MODEL).is_not_null())
        .group_by([col(MAKE_AND_MODEL)])
        .agg([
            col(EVENT_ID).count().alias(ACCIDENT_COUNT),
            col(FATAL_INJURIES).sum(),
            col(TOTAL_INJURIES).sum(),
            col(FATALITY_RATE).mean(),
        ])
        .filter(col(ACCIDENT_COUNT).gt_eq(lit(min_accidents)))
        .sort([MAKE_AND_MODEL], SortMultipleOptions::default())
        .collect()
        .context("Failed to aggregate safety metrics by aircraft model")?;

    let counts: Vec<f64> = metrics
        .column(ACCIDENT_COUNT)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(0.0))
        .collect();
    let volume_ranks = percentile_ranks(&counts);

    let scores: Float64Chunked = metrics
        .column(FATALITY_RATE)?
        .f64()?
        .into_iter()
        .zip(volume_ranks)
        .map(|(rate, rank)| rate.map(|r| r * FATALITY_WEIGHT + rank * VOLUME_WEIGHT))
        .collect();

    metrics.with_column(scores.into_series().with_name(SAFETY_SCORE.into()))?;

    let sorted = metrics.sort(
        [SAFETY_SCORE],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;

    Ok(sorted)
}

/// Accident count, fatalities and mean fatality rate by weather condition and
/// by phase of flight, plus the accident count per year.
pub fn analyze_risk_factors(df: &DataFrame) -> Result<RiskFactors> {
    require_columns(
        df,
        &[WEATHER_CONDITION, FLIGHT_PHASE, YEAR, EVENT_ID, FATAL_INJURIES, FATALITY_RATE],
        "analyze_risk_factors",
    )?;

    let weather = severity_by(df, WEATHER_CONDITION)
        .context("Failed to aggregate risk by weather condition")?;
    let phase = severity_by(df, FLIGHT_PHASE)
        .context("Failed to aggregate risk by flight phase")?;

    let yearly = df
        .clone()
        .lazy()
        .filter(col(YEAR).is_not_null())
        .group_by([col(YEAR)])
        .agg([col(EVENT_ID).count()])
        .sort([YEAR], SortMultipleOptions::default())
        .collect()
        .context("Failed to aggregate accidents by year")?;

    Ok(RiskFactors {
        weather,
        phase,
        yearly,
    })
}

/// Compare risk between operation categories.
///
/// `Accidents_per_Year` divides each category's accident count by the number
/// of distinct years in the whole input table, so every row shares the same
/// denominator. A table without any year yields `0.0`.
pub fn analyze_operational_risks(df: &DataFrame) -> Result<DataFrame> {
    require_columns(
        df,
        &[OPERATION_CATEGORY, EVENT_ID, FATAL_INJURIES, TOTAL_INJURIES, FATALITY_RATE, YEAR],
        "analyze_operational_risks",
    )?;

    let mut op_risk = df
        .clone()
        .lazy()
        .filter(col(OPERATION_CATEGORY).is_not_null())
        .group_by([col(OPERATION_CATEGORY)])
        .agg([
            col(EVENT_ID).count(),
            col(FATAL_INJURIES).sum(),
            col(TOTAL_INJURIES).sum(),
            col(FATALITY_RATE).mean(),
        ])
        .sort([OPERATION_CATEGORY], SortMultipleOptions::default())
        .collect()
        .context("Failed to aggregate risk by operation category")?;

    round_float_columns(
        &mut op_risk,
        &[FATAL_INJURIES, TOTAL_INJURIES, FATALITY_RATE],
        ROUND_DECIMALS,
    )?;

    let years = distinct_years(df)?;
    let per_year: Float64Chunked = op_risk
        .column(EVENT_ID)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .map(|count| {
            count.map(|c| if years == 0 { 0.0 } else { c / years as f64 })
        })
        .collect();

    op_risk.with_column(per_year.into_series().with_name(ACCIDENTS_PER_YEAR.into()))?;

    Ok(op_risk)
}

/// Number of distinct non-missing values in the `Year` column
pub fn distinct_years(df: &DataFrame) -> Result<usize> {
    require_columns(df, &[YEAR], "distinct_years")?;
    let years = df.column(YEAR)?.as_materialized_series().drop_nulls();
    Ok(years.n_unique()?)
}

/// Count, fatality sum and mean fatality rate grouped by `key`, rounded
fn severity_by(df: &DataFrame, key: &str) -> Result<DataFrame> {
    let mut table = df
        .clone()
        .lazy()
        .filter(col(key).is_not_null())
        .group_by([col(key)])
        .agg([
            col(EVENT_ID).count(),
            col(FATAL_INJURIES).sum(),
            col(FATALITY_RATE).mean(),
        ])
        .sort([key], SortMultipleOptions::default())
        .collect()?;

    round_float_columns(&mut table, &[FATAL_INJURIES, FATALITY_RATE], ROUND_DECIMALS)?;
    Ok(table)
}
