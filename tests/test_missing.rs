//! Unit tests for missing value analysis

use topflight::pipeline::{
    analyze_missing_values, get_columns_with_missing, missing_values_table, total_missing,
};

mod common;

use common::*;

#[test]
fn test_analyze_missing_values_counts() {
    let df = create_missing_test_dataframe();

    let counts = analyze_missing_values(&df);
    let count_map: std::collections::HashMap<_, _> = counts.iter().cloned().collect();

    assert_eq!(count_map["col_complete"], 0);
    assert_eq!(count_map["col_one_missing"], 1);
    assert_eq!(count_map["col_two_missing"], 2);
    assert_eq!(count_map["col_all_missing"], 6);
    assert_eq!(count_map["notes"], 5);
}

#[test]
fn test_analyze_missing_values_keeps_dataset_order() {
    let df = create_missing_test_dataframe();

    let names: Vec<String> = analyze_missing_values(&df)
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(
        names,
        vec![
            "col_complete",
            "col_one_missing",
            "col_two_missing",
            "col_all_missing",
            "notes"
        ]
    );
}

#[test]
fn test_total_missing() {
    let df = create_missing_test_dataframe();
    let counts = analyze_missing_values(&df);

    assert_eq!(total_missing(&counts), 1 + 2 + 6 + 5);
}

#[test]
fn test_only_columns_with_missing_are_listed() {
    let df = create_missing_test_dataframe();
    let entries = get_columns_with_missing(&analyze_missing_values(&df), df.height());

    let names: Vec<&str> = entries.iter().map(|e| e.column.as_str()).collect();
    assert_eq!(
        names,
        vec!["col_one_missing", "col_two_missing", "col_all_missing", "notes"]
    );
}

#[test]
fn test_percentages_rounded_to_two_decimals() {
    let df = create_missing_test_dataframe();
    let entries = get_columns_with_missing(&analyze_missing_values(&df), df.height());

    // 1/6 = 16.666..%, 2/6 = 33.333..%, 5/6 = 83.333..%
    assert_eq!(entries[0].percentage, 16.67);
    assert_eq!(entries[1].percentage, 33.33);
    assert_eq!(entries[2].percentage, 100.0);
    assert_eq!(entries[3].percentage, 83.33);
}

#[test]
fn test_complete_dataset_lists_nothing() {
    let df = create_team_stats_dataframe();
    let counts = analyze_missing_values(&df);

    // Only notes has gaps in the fixture
    let entries = get_columns_with_missing(&counts, df.height());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].column, "notes");
    assert_eq!(entries[0].missing, 2);
    assert_eq!(entries[0].percentage, 40.0);
}

#[test]
fn test_empty_dataset_lists_nothing() {
    let counts = vec![("a".to_string(), 0usize)];
    assert!(get_columns_with_missing(&counts, 0).is_empty());
}

#[test]
fn test_missing_values_table_layout() {
    let df = create_missing_test_dataframe();
    let entries = get_columns_with_missing(&analyze_missing_values(&df), df.height());

    let table = missing_values_table(&entries).unwrap();

    assert_shape(&table, 4, 3);
    let names: Vec<String> = table.get_column_names().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["Column", "Number_Missing", "Percentage"]);
    assert_eq!(floats(&table, "Number_Missing"), vec![Some(1.0), Some(2.0), Some(6.0), Some(5.0)]);
}
