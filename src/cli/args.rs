//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default directory name for the exploratory analysis tables
pub const TABLES_DIR_NAME: &str = "exploratory_data_analysis_tables";

/// Topflight - Explore, clean and enrich Big 5 European league team statistics
#[derive(Parser, Debug)]
#[command(name = "topflight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Cleaned dataset path (CSV or Parquet, determined by extension).
    /// Defaults to the input directory with a '_preprocessed' suffix
    /// (e.g., stats.csv -> stats_preprocessed.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for the descriptive statistics, missing values and correlation tables.
    /// Defaults to 'exploratory_data_analysis_tables' next to the input file.
    #[arg(long)]
    pub tables_dir: Option<PathBuf>,

    /// Render histograms and a correlation heatmap as SVG into the tables directory
    #[arg(long, default_value = "false")]
    pub graphs: bool,

    /// Write the full exploratory analysis as JSON into the tables directory
    #[arg(long, default_value = "false")]
    pub export_eda: bool,

    /// JSON file replacing the built-in Champions League / Europa League / Relegation table
    #[arg(long)]
    pub outcome_table: Option<PathBuf>,

    /// Correlation pairs with |r| above this value are highlighted in the report
    #[arg(long, default_value = "0.8", value_parser = validate_correlation_threshold)]
    pub correlation_threshold: f64,

    /// Number of rows shown for head and tail
    #[arg(long, default_value = "5")]
    pub head_rows: usize,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the built-in outcome table as JSON, ready to edit and pass to --outcome-table
    Outcomes {
        /// Output file path
        #[arg(default_value = "outcome_table.json")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path will be in the same directory as the input with a '_preprocessed' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("csv");
            parent.join(format!("{}_preprocessed.{}", stem, extension))
        }))
    }

    /// Get the tables directory, deriving it from the input if not explicitly provided.
    pub fn tables_dir(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.tables_dir.clone().unwrap_or_else(|| {
            input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(TABLES_DIR_NAME)
        }))
    }
}

/// Validator for correlation_threshold parameter
fn validate_correlation_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!(
            "correlation_threshold must be between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
