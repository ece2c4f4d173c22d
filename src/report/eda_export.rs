//! JSON export of the exploratory analysis

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{
    get_columns_with_missing, ColumnInfo, CorrelatedPair, CorrelationMatrix, EdaReport,
    MissingValueEntry, NumericSummary, TextSummary,
};

pub const EDA_SUMMARY_FILE: &str = "eda_summary.json";

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    pub topflight_version: String,
    pub input_file: String,
    pub correlation_threshold: f64,
}

/// Per-column value frequencies
#[derive(Serialize)]
pub struct CategoryCounts<'a> {
    pub column: &'a str,
    pub counts: &'a [(String, usize)],
}

/// Serializable view of an [`EdaReport`]
#[derive(Serialize)]
pub struct EdaExport<'a> {
    pub metadata: ExportMetadata,
    pub rows: usize,
    pub columns: usize,
    pub column_info: &'a [ColumnInfo],
    pub duplicate_rows: usize,
    pub total_missing: usize,
    pub missing: Vec<MissingValueEntry>,
    pub numeric: &'a [NumericSummary],
    pub text: &'a [TextSummary],
    pub correlated_pairs: Vec<CorrelatedPair>,
    pub correlation_matrix: &'a CorrelationMatrix,
    pub category_counts: Vec<CategoryCounts<'a>>,
}

/// Write the EDA report as JSON
pub fn export_eda_summary(
    report: &EdaReport,
    input_file: &Path,
    correlation_threshold: f64,
    output_path: &Path,
) -> Result<()> {
    let export = EdaExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            topflight_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            correlation_threshold,
        },
        rows: report.rows,
        columns: report.cols,
        column_info: &report.column_info,
        duplicate_rows: report.duplicate_rows,
        total_missing: report.total_nulls,
        missing: get_columns_with_missing(&report.null_counts, report.rows),
        numeric: &report.numeric_summaries,
        text: &report.text_summaries,
        correlated_pairs: report.correlation.pairs_above(correlation_threshold),
        correlation_matrix: &report.correlation,
        category_counts: report
            .category_counts
            .iter()
            .map(|(column, counts)| CategoryCounts { column, counts })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write EDA summary: {}", output_path.display()))?;

    Ok(())
}
