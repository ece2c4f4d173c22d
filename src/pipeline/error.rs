//! Error types for the cleaning pipeline.
//!
//! Most functions in the pipeline return `anyhow::Result` and wrap I/O failures
//! with context. The variants here cover the domain failures a caller may want
//! to match on: a column the pipeline depends on is absent, a row cannot be
//! normalised, or an outcome table cannot be used.

use thiserror::Error;

/// Domain errors raised while transforming the dataset.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A column required by a pipeline step is not present in the dataset.
    #[error("Column '{column}' not found in dataset. Available columns: {available:?}")]
    MissingColumn {
        /// Name of the required column
        column: String,
        /// Columns actually present
        available: Vec<String>,
    },

    /// A row reports zero games played, so per-game ratios are undefined.
    #[error("Row {row} has games = 0; cannot scale to a 38-match season")]
    ZeroGames {
        /// Zero-based row index
        row: usize,
    },

    /// A row has no value in the `games` column.
    #[error("Row {row} has no value for games; cannot scale to a 38-match season")]
    MissingGames {
        /// Zero-based row index
        row: usize,
    },

    /// The outcome lookup table could not be parsed or is inconsistent.
    #[error("Invalid outcome table: {0}")]
    InvalidOutcomeTable(String),
}

/// Fail with [`PipelineError::MissingColumn`] unless every name in `required`
/// is a column of `df`.
pub fn require_columns(df: &polars::prelude::DataFrame, required: &[&str]) -> Result<(), PipelineError> {
    let available: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for column in required {
        if !available.iter().any(|name| name == column) {
            return Err(PipelineError::MissingColumn {
                column: column.to_string(),
                available,
            });
        }
    }

    Ok(())
}
