//! Descriptive statistics for numeric and text columns

use std::cmp::Ordering;
use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::columns::{float_values, numeric_column_names, round_to, text_column_names, text_values};

/// Summary of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1)
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }
}

/// Summary of one text column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    pub column: String,
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

/// Summarise a slice of observations. Nulls are ignored.
pub fn summarize_values(column: &str, values: &[Option<f64>]) -> NumericSummary {
    let mut present: Vec<f64> = values.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
    present.sort_by(|a, b| a.total_cmp(b));

    let count = present.len();
    let mean = if count > 0 {
        Some(present.iter().sum::<f64>() / count as f64)
    } else {
        None
    };
    let std = match (mean, count) {
        (Some(mean), n) if n > 1 => {
            let sum_sq: f64 = present.iter().map(|v| (v - mean).powi(2)).sum();
            Some((sum_sq / (n - 1) as f64).sqrt())
        }
        _ => None,
    };

    NumericSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: present.first().copied(),
        q25: quantile_sorted(&present, 0.25),
        median: quantile_sorted(&present, 0.5),
        q75: quantile_sorted(&present, 0.75),
        max: present.last().copied(),
    }
}

/// Linear-interpolated quantile of an ascending slice
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Describe every numeric column of the dataset
pub fn describe_numeric(df: &DataFrame) -> Result<Vec<NumericSummary>> {
    numeric_column_names(df)
        .iter()
        .map(|name| Ok(summarize_values(name, &float_values(df, name)?)))
        .collect()
}

/// Count occurrences of each non-null value, most frequent first.
///
/// Ties keep the order in which values first appear.
pub fn value_counts(values: &[Option<String>]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values.iter().flatten() {
        match index.get(value.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value.as_str(), counts.len());
                counts.push((value.clone(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Describe every text column of the dataset
pub fn describe_text(df: &DataFrame) -> Result<Vec<TextSummary>> {
    text_column_names(df)
        .iter()
        .map(|name| {
            let values = text_values(df, name)?;
            let counts = value_counts(&values);
            let (top, freq) = counts
                .first()
                .map(|(value, n)| (Some(value.clone()), *n))
                .unwrap_or((None, 0));

            Ok(TextSummary {
                column: name.clone(),
                count: values.iter().flatten().count(),
                unique: counts.len(),
                top,
                freq,
            })
        })
        .collect()
}

/// Most frequent value of every column.
///
/// Ties resolve to the smallest value: numeric order for numeric columns,
/// lexical order otherwise. All-null columns have no mode.
pub fn column_modes(df: &DataFrame) -> Result<Vec<(String, Option<String>)>> {
    let numeric = numeric_column_names(df);

    df.get_column_names()
        .iter()
        .map(|name| {
            let name = name.to_string();
            let counts = value_counts(&text_values(df, &name)?);
            let best = counts.first().map(|(_, n)| *n).unwrap_or(0);

            let mut candidates: Vec<&String> = counts
                .iter()
                .filter(|(_, n)| *n == best)
                .map(|(value, _)| value)
                .collect();

            if numeric.contains(&name) {
                candidates.sort_by(|a, b| compare_numeric_text(a, b));
            } else {
                candidates.sort();
            }

            Ok((name, candidates.first().map(|v| v.to_string())))
        })
        .collect()
}

fn compare_numeric_text(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

/// Build the descriptive statistics table.
///
/// Columns: `column, count, mean, std, min, 25%, 50%, 75%, max, range`,
/// with every float rounded to 2 decimals.
pub fn descriptive_statistics_table(summaries: &[NumericSummary]) -> Result<DataFrame> {
    let rounded = |f: fn(&NumericSummary) -> Option<f64>| -> Vec<Option<f64>> {
        summaries.iter().map(|s| f(s).map(|v| round_to(v, 2))).collect()
    };

    let df = DataFrame::new(vec![
        Column::new(
            "column".into(),
            summaries.iter().map(|s| s.column.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "count".into(),
            summaries.iter().map(|s| s.count as u64).collect::<Vec<_>>(),
        ),
        Column::new("mean".into(), rounded(|s| s.mean)),
        Column::new("std".into(), rounded(|s| s.std)),
        Column::new("min".into(), rounded(|s| s.min)),
        Column::new("25%".into(), rounded(|s| s.q25)),
        Column::new("50%".into(), rounded(|s| s.median)),
        Column::new("75%".into(), rounded(|s| s.q75)),
        Column::new("max".into(), rounded(|s| s.max)),
        Column::new("range".into(), rounded(|s| s.range())),
    ])?;

    Ok(df)
}
