//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small team statistics DataFrame with known characteristics
///
/// Rows:
/// - Arsenal 2010-2011: full 38-game season, no notes, listed for the Champions League
/// - Paris S-G 2019-2020: 27-game season, misspelled squad, Champions League notes
/// - Birmingham City 2010-2011: "Relegated" notes
/// - Tottenham 2010-2011: Europa League notes
/// - Bayern Munich 2020-2021: 34-game Bundesliga season
pub fn create_team_stats_dataframe() -> DataFrame {
    df! {
        "rank" => [4i64, 1, 18, 5, 1],
        "squad" => ["Arsenal", "Paris S-G", "Birmingham City", "Tottenham", "Bayern Munich"],
        "competition" => ["Premier League", "Ligue 1", "Premier League", "Premier League", "Fußball-Bundesliga"],
        "season" => ["2010-2011", "2019-2020", "2010-2011", "2010-2011", "2020-2021"],
        "games" => [38i64, 27, 38, 38, 34],
        "wins" => [19i64, 22, 8, 16, 24],
        "draws" => [11i64, 2, 15, 14, 6],
        "losses" => [8i64, 3, 15, 8, 4],
        "goals_for" => [72i64, 75, 37, 55, 99],
        "goals_against" => [43i64, 24, 58, 46, 44],
        "points" => [68i64, 68, 39, 62, 78],
        "assists" => [52i64, 55, 25, 38, 70],
        "pens_made" => [4i64, 6, 3, 2, 8],
        "pens_att" => [5i64, 8, 3, 3, 10],
        "shots_on_target" => [230i64, 160, 140, 190, 240],
        "shots_on_target_against" => [120i64, 70, 190, 140, 110],
        "saves" => [80i64, 50, 135, 96, 70],
        "clean_sheets" => [13i64, 13, 9, 10, 12],
        "notes" => [
            None,
            Some("→ Champions League via league finish"),
            Some("Relegated"),
            Some("→ Europa League via league finish"),
            None,
        ],
    }
    .unwrap()
}

/// A single-row team statistics frame with every count set from `games` and `wins`
pub fn create_single_team_dataframe(games: i64, wins: i64, draws: i64, losses: i64) -> DataFrame {
    df! {
        "rank" => [1i64],
        "squad" => ["Test FC"],
        "competition" => ["Premier League"],
        "season" => ["2015-2016"],
        "games" => [games],
        "wins" => [wins],
        "draws" => [draws],
        "losses" => [losses],
        "goals_for" => [40i64],
        "goals_against" => [20i64],
        "assists" => [30i64],
        "pens_made" => [2i64],
        "pens_att" => [3i64],
        "shots_on_target" => [100i64],
        "shots_on_target_against" => [60i64],
        "saves" => [40i64],
        "clean_sheets" => [8i64],
        "notes" => [None::<&str>],
    }
    .unwrap()
}

/// Create a larger random numeric DataFrame for stress tests
pub fn create_large_test_dataframe(rows: usize, cols: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let columns: Vec<Column> = (0..cols)
        .map(|i| {
            let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
            Column::new(format!("stat_{}", i).into(), values)
        })
        .collect();

    DataFrame::new(columns).unwrap()
}

/// Create a DataFrame with specific missing value patterns
pub fn create_missing_test_dataframe() -> DataFrame {
    df! {
        "col_complete" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0],
        "col_one_missing" => [Some(1.0f64), None, Some(3.0), Some(4.0), Some(5.0), Some(6.0)],
        "col_two_missing" => [Some(1.0f64), Some(2.0), None, None, Some(5.0), Some(6.0)],
        "col_all_missing" => [None::<f64>, None, None, None, None, None],
        "notes" => [None, Some("Relegated"), None, None, None, None],
    }
    .unwrap()
}

/// Create a DataFrame with known correlation patterns
pub fn create_correlation_test_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0], // b = 2a
        "c" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], // reversed
        "d" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0],
        "constant" => [5.0f64; 10],
        "label" => ["x", "y", "x", "y", "x", "y", "x", "y", "x", "y"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("team_stats.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("team_stats.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}

/// Read a numeric column as plain options
pub fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    topflight::pipeline::float_values(df, name).unwrap()
}

/// Read a column rendered as text
pub fn texts(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    topflight::pipeline::text_values(df, name).unwrap()
}
