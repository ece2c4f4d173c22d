//! Exploratory data analysis over the loaded dataset
//!
//! Everything here is a pure read: the dataset is never mutated, and the
//! results are collected into an [`EdaReport`] for display and export.

use std::collections::HashSet;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::columns::{text_column_names, text_values};
use super::correlation::{correlation_matrix, CorrelationMatrix};
use super::describe::{
    column_modes, describe_numeric, describe_text, value_counts, NumericSummary, TextSummary,
};
use super::missing::{analyze_missing_values, total_missing};

/// Name, dtype and non-null count of a column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
}

/// Bundle of exploratory statistics for one dataset
#[derive(Debug, Clone)]
pub struct EdaReport {
    pub rows: usize,
    pub cols: usize,
    pub column_info: Vec<ColumnInfo>,
    pub head: DataFrame,
    pub tail: DataFrame,
    pub modes: Vec<(String, Option<String>)>,
    pub numeric_summaries: Vec<NumericSummary>,
    pub text_summaries: Vec<TextSummary>,
    pub correlation: CorrelationMatrix,
    pub distinct_counts: Vec<(String, usize)>,
    pub duplicate_rows: usize,
    pub null_counts: Vec<(String, usize)>,
    pub total_nulls: usize,
    pub unique_values: Vec<(String, Vec<String>)>,
    pub category_counts: Vec<(String, Vec<(String, usize)>)>,
}

/// Run every exploratory statistic over `df`, showing `head_rows` rows at each end.
pub fn explore(df: &DataFrame, head_rows: usize) -> Result<EdaReport> {
    let (rows, cols) = df.shape();

    let column_info = df
        .get_columns()
        .iter()
        .map(|col| ColumnInfo {
            name: col.name().to_string(),
            dtype: col.dtype().to_string(),
            non_null: col.len() - col.null_count(),
        })
        .collect();

    let mut distinct_counts = Vec::with_capacity(cols);
    let mut unique_values = Vec::with_capacity(cols);
    for name in df.get_column_names() {
        let values = text_values(df, name.as_str())?;
        let uniques = unique_in_order(&values);
        distinct_counts.push((name.to_string(), uniques.iter().flatten().count()));
        unique_values.push((
            name.to_string(),
            uniques
                .into_iter()
                .map(|v| v.unwrap_or_else(|| "null".to_string()))
                .collect(),
        ));
    }

    let category_counts = text_column_names(df)
        .into_iter()
        .map(|name| {
            let counts = value_counts(&text_values(df, &name)?);
            Ok((name, counts))
        })
        .collect::<Result<Vec<_>>>()?;

    let null_counts = analyze_missing_values(df);
    let total_nulls = total_missing(&null_counts);

    Ok(EdaReport {
        rows,
        cols,
        column_info,
        head: df.head(Some(head_rows)),
        tail: df.tail(Some(head_rows)),
        modes: column_modes(df)?,
        numeric_summaries: describe_numeric(df)?,
        text_summaries: describe_text(df)?,
        correlation: correlation_matrix(df)?,
        distinct_counts,
        duplicate_rows: count_duplicate_rows(df)?,
        null_counts,
        total_nulls,
        unique_values,
        category_counts,
    })
}

/// Distinct values in first-seen order, including a single `None` for nulls
fn unique_in_order(values: &[Option<String>]) -> Vec<Option<String>> {
    let mut seen: HashSet<Option<&str>> = HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert(v.as_deref()))
        .cloned()
        .collect()
}

/// Number of rows identical to an earlier row
pub fn count_duplicate_rows(df: &DataFrame) -> Result<usize> {
    let mut keys: Vec<String> = vec![String::new(); df.height()];

    for name in df.get_column_names() {
        for (key, value) in keys.iter_mut().zip(text_values(df, name.as_str())?) {
            match value {
                Some(v) => {
                    key.push('\u{1f}');
                    key.push_str(&v);
                }
                None => key.push('\u{0}'),
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(keys.len());
    Ok(keys.iter().filter(|key| !seen.insert(key.as_str())).count())
}
