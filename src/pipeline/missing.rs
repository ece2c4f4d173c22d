//! Missing value analysis

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::columns::round_to;

/// A column that has at least one missing value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingValueEntry {
    pub column: String,
    pub missing: usize,
    /// Share of rows missing, in percent, rounded to 2 decimals
    pub percentage: f64,
}

/// Count null values per column, in dataset order
pub fn analyze_missing_values(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}

/// Total number of null cells in the dataset
pub fn total_missing(null_counts: &[(String, usize)]) -> usize {
    null_counts.iter().map(|(_, count)| count).sum()
}

/// Keep only columns with missing values and express them as a percentage of `rows`
pub fn get_columns_with_missing(null_counts: &[(String, usize)], rows: usize) -> Vec<MissingValueEntry> {
    if rows == 0 {
        return Vec::new();
    }

    null_counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| MissingValueEntry {
            column: name.clone(),
            missing: *count,
            percentage: round_to(*count as f64 / rows as f64 * 100.0, 2),
        })
        .collect()
}

/// Build the missing values table: `Column, Number_Missing, Percentage`
pub fn missing_values_table(entries: &[MissingValueEntry]) -> Result<DataFrame> {
    let names: Vec<String> = entries.iter().map(|e| e.column.clone()).collect();
    let counts: Vec<u64> = entries.iter().map(|e| e.missing as u64).collect();
    let percentages: Vec<f64> = entries.iter().map(|e| e.percentage).collect();

    let df = DataFrame::new(vec![
        Column::new("Column".into(), names),
        Column::new("Number_Missing".into(), counts),
        Column::new("Percentage".into(), percentages),
    ])?;

    Ok(df)
}
