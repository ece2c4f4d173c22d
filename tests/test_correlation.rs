//! Unit tests for the correlation matrix

use topflight::pipeline::{correlation_matrix, pearson_correlation};

mod common;

use common::*;

#[test]
fn test_perfect_positive_correlation() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    let r = matrix.get("a", "b").unwrap();
    assert!((r - 1.0).abs() < 1e-10, "a and b should correlate at 1.0, got {}", r);
}

#[test]
fn test_perfect_negative_correlation() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    let r = matrix.get("a", "c").unwrap();
    assert!((r + 1.0).abs() < 1e-10, "a and c should correlate at -1.0, got {}", r);
}

#[test]
fn test_constant_column_gives_null() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    assert_eq!(matrix.get("a", "constant"), None);
    assert_eq!(matrix.get("constant", "constant"), None);
}

#[test]
fn test_matrix_is_symmetric_with_unit_diagonal() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    let n = matrix.columns.len();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(matrix.values[i][j], matrix.values[j][i]);
        }
    }
    for name in ["a", "b", "c", "d"] {
        let r = matrix.get(name, name).unwrap();
        assert!((r - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_text_columns_are_ignored() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    assert_eq!(matrix.columns, vec!["a", "b", "c", "d", "constant"]);
    assert_eq!(matrix.get("a", "label"), None);
}

#[test]
fn test_pairs_above_threshold() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    let pairs = matrix.pairs_above(0.95);

    // a-b, a-c and b-c all sit at |r| = 1
    assert_eq!(pairs.len(), 3);
    for pair in &pairs {
        assert!(pair.correlation.abs() > 0.95);
        assert_ne!(pair.feature1, "d");
        assert_ne!(pair.feature2, "d");
    }
}

#[test]
fn test_pairs_sorted_by_strength() {
    let xs: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let df = polars::df! {
        "x" => xs.clone(),
        "strong" => xs.iter().map(|x| x * 2.0 + if (*x as i64) % 2 == 0 { 0.5 } else { -0.5 }).collect::<Vec<f64>>(),
        "weaker" => xs.iter().map(|x| x + if (*x as i64) % 3 == 0 { 6.0 } else { -3.0 }).collect::<Vec<f64>>(),
    }
    .unwrap();

    let matrix = correlation_matrix(&df).unwrap();
    let pairs = matrix.pairs_above(0.5);

    assert!(!pairs.is_empty());
    for window in pairs.windows(2) {
        assert!(window[0].correlation.abs() >= window[1].correlation.abs());
    }
}

#[test]
fn test_pairwise_complete_observations() {
    let xs = vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
    let ys = vec![Some(2.0), Some(4.0), Some(100.0), None, Some(10.0)];

    // Rows 2 and 3 are skipped, leaving y = 2x
    let r = pearson_correlation(&xs, &ys).unwrap();
    assert!((r - 1.0).abs() < 1e-10);
}

#[test]
fn test_too_few_observations() {
    assert_eq!(pearson_correlation(&[Some(1.0)], &[Some(2.0)]), None);
    assert_eq!(pearson_correlation(&[Some(1.0), None], &[None, Some(2.0)]), None);
}

#[test]
fn test_matrix_table_layout() {
    let df = create_correlation_test_dataframe();
    let matrix = correlation_matrix(&df).unwrap();

    let table = matrix.to_dataframe().unwrap();

    assert_shape(&table, 5, 6);
    let names: Vec<String> = table.get_column_names().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["column", "a", "b", "c", "d", "constant"]);
    assert_eq!(
        texts(&table, "column"),
        vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("c".to_string()),
            Some("d".to_string()),
            Some("constant".to_string())
        ]
    );
}

#[test]
fn test_large_matrix_is_bounded() {
    let df = create_large_test_dataframe(200, 12);
    let matrix = correlation_matrix(&df).unwrap();

    assert_eq!(matrix.columns.len(), 12);
    for row in &matrix.values {
        for r in row.iter().flatten() {
            assert!((-1.0..=1.0).contains(r));
        }
    }
}
