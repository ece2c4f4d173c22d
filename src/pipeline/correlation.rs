//! Pearson correlation matrix over numeric columns

use anyhow::Result;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::columns::{float_values, numeric_column_names};

/// Represents a correlated pair of columns
#[derive(Debug, Clone, Serialize)]
pub struct CorrelatedPair {
    pub feature1: String,
    pub feature2: String,
    pub correlation: f64,
}

/// Square correlation matrix. Entries are `None` where the correlation is
/// undefined (constant column or fewer than two shared observations).
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Look up the correlation between two columns by name
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Pairs with absolute correlation above `threshold`, strongest first
    pub fn pairs_above(&self, threshold: f64) -> Vec<CorrelatedPair> {
        let n = self.columns.len();
        let mut pairs = Vec::new();

        // Upper triangle only
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(corr) = self.values[i][j] {
                    if corr.abs() > threshold {
                        pairs.push(CorrelatedPair {
                            feature1: self.columns[i].clone(),
                            feature2: self.columns[j].clone(),
                            correlation: corr,
                        });
                    }
                }
            }
        }

        pairs.sort_by(|a, b| {
            b.correlation
                .abs()
                .partial_cmp(&a.correlation.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        pairs
    }

    /// Render as a table whose first column holds the row labels
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Column::new("column".into(), self.columns.clone()));

        for (j, name) in self.columns.iter().enumerate() {
            let values: Vec<Option<f64>> = self.values.iter().map(|row| row[j]).collect();
            columns.push(Column::new(name.as_str().into(), values));
        }

        Ok(DataFrame::new(columns)?)
    }
}

/// Compute the correlation matrix of every numeric column.
///
/// Each pair uses the rows where both values are present; non-numeric columns
/// are ignored. Pairs are evaluated in parallel.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let names = numeric_column_names(df);
    let data: Vec<Vec<Option<f64>>> = names
        .iter()
        .map(|name| float_values(df, name))
        .collect::<Result<_>>()?;

    let n = names.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i..n).map(move |j| (i, j)))
        .collect();

    let computed: Vec<((usize, usize), Option<f64>)> = pairs
        .par_iter()
        .map(|&(i, j)| ((i, j), pearson_correlation(&data[i], &data[j])))
        .collect();

    let mut values = vec![vec![None; n]; n];
    for ((i, j), corr) in computed {
        values[i][j] = corr;
        values[j][i] = corr;
    }

    Ok(CorrelationMatrix {
        columns: names,
        values,
    })
}

/// Pearson correlation over pairwise complete observations using Welford's algorithm
pub fn pearson_correlation(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    if xs.len() != ys.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            if x.is_nan() || y.is_nan() {
                continue;
            }
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 || var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    let r = cov_xy / (var_x.sqrt() * var_y.sqrt());
    Some(r.clamp(-1.0, 1.0))
}
