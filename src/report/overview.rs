//! Terminal rendering of the exploratory analysis

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::EdaReport;

/// Number of most frequent values shown per text column
const TOP_VALUES: usize = 3;

fn print_section(title: &str) {
    println!();
    println!("    {} {}", style("✧").cyan(), style(title).white().bold());
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print the column overview, head/tail samples, data quality counts,
/// strongly correlated pairs and the most frequent text values.
pub fn print_overview(report: &EdaReport, correlation_threshold: f64) {
    print_section("Columns");
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Non-null").add_attribute(Attribute::Bold),
        Cell::new("Distinct").add_attribute(Attribute::Bold),
        Cell::new("Mode").add_attribute(Attribute::Bold),
    ]);

    for (i, info) in report.column_info.iter().enumerate() {
        let distinct = report.distinct_counts.get(i).map(|(_, n)| *n).unwrap_or(0);
        let mode = report
            .modes
            .get(i)
            .and_then(|(_, m)| m.clone())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(&info.name),
            Cell::new(&info.dtype).fg(Color::Cyan),
            Cell::new(info.non_null).fg(if info.non_null < report.rows {
                Color::Yellow
            } else {
                Color::White
            }),
            Cell::new(distinct),
            Cell::new(mode),
        ]);
    }
    print_indented(&table);

    print_section("Head");
    println!("{}", report.head);
    print_section("Tail");
    println!("{}", report.tail);

    print_section("Data quality");
    println!("      Rows: {}", report.rows);
    println!("      Columns: {}", report.cols);
    println!("      Missing cells: {}", style(report.total_nulls).yellow());
    println!("      Duplicated rows: {}", style(report.duplicate_rows).yellow());

    let pairs = report.correlation.pairs_above(correlation_threshold);
    print_section(&format!("Correlated pairs (|r| > {:.2})", correlation_threshold));
    if pairs.is_empty() {
        println!("      none");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("r").add_attribute(Attribute::Bold),
        ]);
        for pair in &pairs {
            table.add_row(vec![
                Cell::new(&pair.feature1),
                Cell::new(&pair.feature2),
                Cell::new(format!("{:+.3}", pair.correlation)).fg(if pair.correlation > 0.0 {
                    Color::Red
                } else {
                    Color::Blue
                }),
            ]);
        }
        print_indented(&table);
    }

    if !report.category_counts.is_empty() {
        print_section("Most frequent values");
        for (column, counts) in &report.category_counts {
            let top: Vec<String> = counts
                .iter()
                .take(TOP_VALUES)
                .map(|(value, n)| format!("{} ({})", value, n))
                .collect();
            println!("      {}: {}", style(column).cyan(), top.join(", "));
        }
    }
}
