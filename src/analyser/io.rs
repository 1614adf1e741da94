//! Dataset loading.
//!
//! Dispatches on file extension: CSV through polars' lazy reader with
//! schema inference, Excel workbooks through calamine with per-column
//! type resolution. Either way the caller receives a typed `DataFrame`;
//! cell type inference happens here, never in the analyser.

use crate::error::{Error, Result};
use calamine::{Data, Reader as _, open_workbook_auto};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

pub fn load_df(path: &Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xls" => read_workbook(path),
        _ => Err(Error::Input(format!("unsupported file extension: '{ext}'"))),
    }
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10_000))
        .with_has_header(true)
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| Error::Input(format!("failed to read CSV '{}': {e}", path.display())))
}

fn read_workbook(path: &Path) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Input(format!("failed to open workbook '{}': {e}", path.display())))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Input(format!("workbook '{}' has no sheets", path.display())))?
        .map_err(|e| Error::Input(format!("failed to read worksheet: {e}")))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let headers = dedup_headers(header_row);

    let mut cells: Vec<Vec<Data>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, slot) in cells.iter_mut().enumerate() {
            slot.push(row.get(idx).cloned().unwrap_or(Data::Empty));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| build_column(name, &values))
        .collect::<Vec<_>>();

    DataFrame::new(columns).map_err(|e| Error::Input(format!("invalid worksheet layout: {e}")))
}

/// Header names must be unique and non-empty for a valid frame: blanks
/// become `column_<idx>`, repeats get a `_2`, `_3`, ... suffix.
fn dedup_headers(row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(row.len());

    for (idx, cell) in row.iter().enumerate() {
        let base = match cell {
            Data::Empty => String::new(),
            other => other.to_string().trim().to_owned(),
        };
        let base = if base.is_empty() {
            format!("column_{idx}")
        } else {
            base
        };

        let uses = seen.entry(base.clone()).or_insert(0);
        *uses += 1;
        if *uses == 1 {
            headers.push(base);
        } else {
            headers.push(format!("{base}_{uses}"));
        }
    }

    headers
}

fn build_column(name: String, values: &[Data]) -> Column {
    let all_empty = values.iter().all(|v| matches!(v, Data::Empty));
    let numeric = values
        .iter()
        .all(|v| matches!(v, Data::Empty | Data::Float(_) | Data::Int(_)));
    let boolean = values.iter().all(|v| matches!(v, Data::Empty | Data::Bool(_)));

    let series = if all_empty {
        Series::new_null(name.into(), values.len())
    } else if numeric {
        let floats: Vec<Option<f64>> = values
            .iter()
            .map(|v| match v {
                Data::Float(f) => Some(*f),
                Data::Int(i) => Some(*i as f64),
                _ => None,
            })
            .collect();
        Series::new(name.into(), floats)
    } else if boolean {
        let bools: Vec<Option<bool>> = values
            .iter()
            .map(|v| match v {
                Data::Bool(b) => Some(*b),
                _ => None,
            })
            .collect();
        Series::new(name.into(), bools)
    } else {
        let strings: Vec<Option<String>> = values
            .iter()
            .map(|v| match v {
                Data::Empty => None,
                other => Some(other.to_string()),
            })
            .collect();
        Series::new(name.into(), strings)
    };

    Column::from(series)
}
