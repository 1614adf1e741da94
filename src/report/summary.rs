//! The analysis digest embedded into the report prompt.
//!
//! The digest is a pure function of the analysis: fixed section order,
//! columns listed in frame order, amounts rounded to whole currency with
//! thousands separators. Repeated calls on the same analysis produce
//! byte-identical text.

use crate::analyser::DatasetAnalysis;

/// Render the fixed-order text digest of an analysis.
pub fn summarise(analysis: &DatasetAnalysis) -> String {
    let mut text = String::new();

    text.push_str("Dataset Overview:\n");
    text.push_str(&format!(
        "- {} rows, {} columns\n",
        format_count(analysis.row_count),
        analysis.column_count
    ));
    text.push_str(&format!(
        "- Numeric columns: {}\n",
        analysis.numeric_columns.len()
    ));
    text.push_str(&format!(
        "- Categorical columns: {}\n",
        analysis.categorical_columns.len()
    ));

    text.push_str("\nKey Statistics:");
    for name in &analysis.numeric_columns {
        if let Some(stats) = analysis.numeric_stats.get(name) {
            text.push_str(&format!(
                "\n{name}: Range {} - {}, Average {}, Total {}",
                format_amount(stats.min),
                format_amount(stats.max),
                format_amount(stats.mean),
                format_amount(stats.sum)
            ));
        }
    }

    text.push_str("\n\nTop Categories:");
    for name in &analysis.categorical_columns {
        if let Some(top) = analysis.top_values.get(name) {
            let listed = top
                .iter()
                .map(|(value, count)| format!("{value}({count})"))
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!("\n{name}: {listed}"));
        }
    }

    if analysis.has_outliers() {
        text.push_str(&format!(
            "\n\nOutliers detected in: {}",
            analysis.outlier_columns().join(", ")
        ));
    }

    text
}

/// Whole-currency formatting: `1234.56` becomes `$1,235`.
fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let magnitude = group_thousands(&format!("{}", rounded.abs() as u64));
    if rounded < 0.0 {
        format!("$-{magnitude}")
    } else {
        format!("${magnitude}")
    }
}

fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyser::analyse_df;
    use anyhow::Result;
    use polars::prelude::*;

    fn sample_analysis() -> Result<DatasetAnalysis> {
        let df = DataFrame::new(vec![
            Column::from(Series::new("amount".into(), vec![10.0, 20.0, 30.0])),
            Column::from(Series::new("category".into(), vec!["x", "y", "x"])),
        ])?;
        Ok(analyse_df(&df)?)
    }

    #[test]
    fn test_digest_structure() -> Result<()> {
        let digest = summarise(&sample_analysis()?);

        assert!(digest.starts_with("Dataset Overview:\n"));
        assert!(digest.contains("- 3 rows, 2 columns"));
        assert!(digest.contains("- Numeric columns: 1"));
        assert!(digest.contains("- Categorical columns: 1"));
        assert!(digest.contains("amount: Range $10 - $30, Average $20, Total $60"));
        assert!(digest.contains("category: x(2), y(1)"));
        assert!(
            !digest.contains("Outliers detected in:"),
            "outlier line only appears when outliers exist"
        );
        Ok(())
    }

    #[test]
    fn test_digest_is_deterministic() -> Result<()> {
        let analysis = sample_analysis()?;
        assert_eq!(summarise(&analysis), summarise(&analysis));
        Ok(())
    }

    #[test]
    fn test_outlier_line_lists_affected_columns() -> Result<()> {
        let df = DataFrame::new(vec![Column::from(Series::new(
            "spend".into(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0],
        ))])?;
        let digest = summarise(&analyse_df(&df)?);

        assert!(digest.ends_with("Outliers detected in: spend"));
        Ok(())
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_amount(20.0), "$20");
        assert_eq!(format_amount(1234.56), "$1,235");
        assert_eq!(format_amount(1_000_000.0), "$1,000,000");
        assert_eq!(format_amount(-1234.0), "$-1,234");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
