use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification of a column for analysis purposes.
///
/// Numeric columns (integers and floats) get descriptive statistics and
/// outlier detection; everything else - text, booleans, dates - is treated
/// as a set of opaque categories. Columns with no typed cells at all
/// (polars dtype `Null`) belong to neither class.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptive statistics for one numeric column, computed over its
/// non-missing values only.
///
/// `std_dev` is the sample standard deviation and is absent below two
/// values, where it is undefined.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct NumericColumnStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: Option<f64>,
    pub sum: f64,
}

/// The full result of analysing one dataset.
///
/// Column-keyed maps only ever hold keys from the matching partition:
/// `numeric_stats` and `outlier_counts` from `numeric_columns`,
/// `top_values` from `categorical_columns`. `missing_counts` covers every
/// column regardless of classification. Iteration order for output comes
/// from the ordered name vectors, never from the maps.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct DatasetAnalysis {
    pub row_count: usize,
    pub column_count: usize,
    pub column_names: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub missing_counts: HashMap<String, usize>,
    pub numeric_stats: HashMap<String, NumericColumnStats>,
    pub outlier_counts: HashMap<String, usize>,
    pub top_values: HashMap<String, Vec<(String, usize)>>,
}

impl DatasetAnalysis {
    /// Total missing cells across all columns.
    pub fn missing_total(&self) -> usize {
        self.missing_counts.values().sum()
    }

    pub fn has_outliers(&self) -> bool {
        !self.outlier_counts.is_empty()
    }

    /// Numeric columns with at least one upper-tail outlier, in column order.
    pub fn outlier_columns(&self) -> Vec<&str> {
        self.numeric_columns
            .iter()
            .filter(|name| self.outlier_counts.contains_key(name.as_str()))
            .map(|name| name.as_str())
            .collect()
    }
}
