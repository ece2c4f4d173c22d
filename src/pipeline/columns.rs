//! Column access helpers shared by the analysis and cleaning steps

use anyhow::{Context, Result};
use polars::prelude::*;

/// Names of the numeric columns, in dataset order
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect()
}

/// Names of the text columns, in dataset order
pub fn text_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| matches!(col.dtype(), DataType::String))
        .map(|col| col.name().to_string())
        .collect()
}

/// Values of a column cast to f64. Values that cannot be cast become `None`.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .as_materialized_series()
        .cast(&DataType::Float64)?;

    Ok(series.f64()?.iter().collect())
}

/// Values of a column cast to f64, failing if any value is not numeric.
pub fn strict_float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .as_materialized_series()
        .strict_cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' contains non-numeric values", name))?;

    Ok(series.f64()?.iter().collect())
}

/// Values of a column rendered as text
pub fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .as_materialized_series()
        .cast(&DataType::String)?;

    Ok(series
        .str()?
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Round half to even at the given number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
