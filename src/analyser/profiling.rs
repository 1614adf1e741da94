//! Per-column statistical profiling.
//!
//! Numeric columns get a descriptive summary and an upper-tail outlier
//! count based on the interquartile range; categorical columns get a
//! ranked frequency table. All statistics are computed over non-missing
//! values only.

use super::types::NumericColumnStats;
use crate::error::Result;
use polars::prelude::*;
use std::collections::HashMap;

/// Number of most-frequent values reported per categorical column.
pub const TOP_VALUE_LIMIT: usize = 3;

/// Multiplier applied to the IQR when deriving the outlier threshold.
pub const OUTLIER_IQR_FACTOR: f64 = 1.5;

/// Descriptive statistics for a numeric column, or `None` when the column
/// has no non-missing values.
pub fn numeric_summary(col: &Column) -> Result<Option<NumericColumnStats>> {
    let series = col.as_materialized_series();
    let ca = series.cast(&DataType::Float64)?;
    let ca = ca.f64()?;

    let count = ca.len() - ca.null_count();
    if count == 0 {
        return Ok(None);
    }

    let (Some(min), Some(max), Some(mean), Some(median), Some(sum)) =
        (ca.min(), ca.max(), ca.mean(), ca.median(), ca.sum())
    else {
        return Ok(None);
    };

    // Sample standard deviation is undefined for a single value.
    let std_dev = if count >= 2 { ca.std(1) } else { None };

    Ok(Some(NumericColumnStats {
        count,
        min,
        max,
        mean,
        median,
        std_dev,
        sum,
    }))
}

/// Count of non-missing values strictly above `Q3 + 1.5*IQR`.
///
/// Quartiles use linear interpolation between order statistics. Only the
/// upper tail is checked; values below `Q1 - 1.5*IQR` are not counted.
/// Columns with fewer than two non-missing values report zero.
pub fn upper_outlier_count(col: &Column) -> Result<usize> {
    let series = col.as_materialized_series();
    let ca = series.cast(&DataType::Float64)?;
    let ca = ca.f64()?;

    if ca.len() - ca.null_count() < 2 {
        return Ok(0);
    }

    let q1 = ca.quantile(0.25, QuantileMethod::Linear).unwrap_or(None);
    let q3 = ca.quantile(0.75, QuantileMethod::Linear).unwrap_or(None);
    let (Some(q1), Some(q3)) = (q1, q3) else {
        return Ok(0);
    };

    let threshold = q3 + OUTLIER_IQR_FACTOR * (q3 - q1);
    Ok(ca.into_iter().flatten().filter(|&v| v > threshold).count())
}

/// The `limit` most frequent distinct values of a categorical column with
/// their occurrence counts, missing cells excluded.
///
/// The stable sort keeps first-seen row order among equal counts, so the
/// ranking is deterministic for any input.
pub fn top_values(col: &Column, limit: usize) -> Result<Vec<(String, usize)>> {
    let series = col.as_materialized_series();
    let non_missing = series.drop_nulls();
    let strings = non_missing.cast(&DataType::String)?;
    let ca = strings.str()?;

    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<(String, usize)> = Vec::new();
    for value in ca.into_iter().flatten() {
        if let Some(&slot) = slots.get(value) {
            if let Some(entry) = ranked.get_mut(slot) {
                entry.1 += 1;
            }
        } else {
            slots.insert(value.to_owned(), ranked.len());
            ranked.push((value.to_owned(), 1));
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    Ok(ranked)
}
