//! CSV tables derived from the exploratory analysis

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::pipeline::{
    descriptive_statistics_table, get_columns_with_missing, missing_values_table, write_csv,
    EdaReport,
};

pub const DESCRIPTIVE_STATISTICS_FILE: &str = "Descriptive_Statistics_Table.csv";
pub const MISSING_VALUES_FILE: &str = "Missing_Values_Table.csv";
pub const CORRELATION_MATRIX_FILE: &str = "Correlation_Matrix_Table.csv";

/// Write the descriptive statistics table into `dir`
pub fn write_descriptive_statistics(report: &EdaReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(DESCRIPTIVE_STATISTICS_FILE);
    let mut df = descriptive_statistics_table(&report.numeric_summaries)?;
    write_csv(&mut df, &path)?;
    Ok(path)
}

/// Write the missing values table into `dir`.
///
/// Returns the path and the number of columns listed.
pub fn write_missing_values(report: &EdaReport, dir: &Path) -> Result<(PathBuf, usize)> {
    let path = dir.join(MISSING_VALUES_FILE);
    let entries = get_columns_with_missing(&report.null_counts, report.rows);
    let mut df = missing_values_table(&entries)?;
    write_csv(&mut df, &path)?;
    Ok((path, entries.len()))
}

/// Write the correlation matrix table into `dir`
pub fn write_correlation_matrix(report: &EdaReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CORRELATION_MATRIX_FILE);
    let mut df = report.correlation.to_dataframe()?;
    write_csv(&mut df, &path)?;
    Ok(path)
}
