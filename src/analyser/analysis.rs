use super::profiling;
use super::types::{ColumnKind, DatasetAnalysis};
use crate::error::{Result, ResultExt as _};
use polars::prelude::*;

/// Classify a column by its declared dtype.
///
/// Integer and float columns are numeric; `Null` columns (no typed cells
/// at all) are unclassified; everything else, including booleans and
/// temporals, counts as categorical. There is no per-cell coercion: a
/// string column holding digit-like values stays categorical.
pub fn classify_column(dtype: &DataType) -> Option<ColumnKind> {
    if dtype.is_primitive_numeric() {
        Some(ColumnKind::Numeric)
    } else if matches!(dtype, DataType::Null) {
        None
    } else {
        Some(ColumnKind::Categorical)
    }
}

/// Analyse a dataset into its statistical summary.
///
/// Walks the columns in frame order: classifies each, counts missing
/// cells, and dispatches into [`profiling`] for per-column statistics.
/// Never fails for a structurally valid frame; empty frames and
/// all-missing columns produce empty or absent entries.
pub fn analyse_df(df: &DataFrame) -> Result<DatasetAnalysis> {
    let mut analysis = DatasetAnalysis {
        row_count: df.height(),
        column_count: df.width(),
        ..Default::default()
    };

    for col in df.get_columns() {
        let name = col.name().to_string();
        analysis.column_names.push(name.clone());
        analysis.missing_counts.insert(name.clone(), col.null_count());

        match classify_column(col.dtype()) {
            Some(ColumnKind::Numeric) => {
                if let Some(stats) = profiling::numeric_summary(col)
                    .with_context(|| format!("numeric profiling failed for column '{name}'"))?
                {
                    analysis.numeric_stats.insert(name.clone(), stats);
                }

                let outliers = profiling::upper_outlier_count(col)
                    .with_context(|| format!("outlier detection failed for column '{name}'"))?;
                if outliers > 0 {
                    analysis.outlier_counts.insert(name.clone(), outliers);
                }

                analysis.numeric_columns.push(name);
            }
            Some(ColumnKind::Categorical) => {
                let top = profiling::top_values(col, profiling::TOP_VALUE_LIMIT)
                    .with_context(|| format!("frequency ranking failed for column '{name}'"))?;
                if !top.is_empty() {
                    analysis.top_values.insert(name.clone(), top);
                }

                analysis.categorical_columns.push(name);
            }
            None => {}
        }
    }

    Ok(analysis)
}
