//! Small numeric helpers shared by the aggregation functions

use anyhow::Result;
use polars::prelude::*;

/// Fractional rank of each value among all values, in `(0, 1]`.
///
/// Ranks are 1-based; tied values share the average of the ranks they
/// occupy. The rank is divided by the number of values. Ordering is
/// [`f64::total_cmp`], so NaN ranks above every number and NaNs tie.
pub fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[order[end]].total_cmp(&values[order[start]]).is_eq() {
            end += 1;
        }
        // positions start..end hold ranks start+1..=end
        let average = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = average / n as f64;
        }
        start = end;
    }

    ranks
}

/// Round to `decimals` places, resolving exact halves to the even neighbour.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Round every floating point column among `columns` in place.
/// Integer columns (counts, integer sums) are left untouched.
pub fn round_float_columns(df: &mut DataFrame, columns: &[&str], decimals: u32) -> Result<()> {
    for &name in columns {
        let column = df.column(name)?;
        if !matches!(column.dtype(), DataType::Float32 | DataType::Float64) {
            continue;
        }

        let rounded: Float64Chunked = column
            .cast(&DataType::Float64)?
            .f64()?
            .iter()
            .map(|v| v.map(|x| round_half_even(x, decimals)))
            .collect();

        df.with_column(rounded.into_series().with_name(name.into()))?;
    }
    Ok(())
}
