//! Run summary report generation

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::Outcome;

/// Summary of one cleaning run
#[derive(Debug, Default)]
pub struct CleaningSummary {
    pub initial_rows: usize,
    pub initial_columns: usize,
    pub final_rows: usize,
    pub final_columns: usize,
    pub adjusted_columns: Vec<String>,
    pub names_fixed: usize,
    pub rank_recast: bool,
    pub outcome_counts: Vec<(Outcome, usize)>,
    pub notes_dropped: bool,
    pub outputs: Vec<PathBuf>,
    load_time: Duration,
    eda_time: Duration,
    transform_time: Duration,
    save_time: Duration,
}

impl CleaningSummary {
    pub fn new(initial_rows: usize, initial_columns: usize) -> Self {
        Self {
            initial_rows,
            initial_columns,
            final_rows: initial_rows,
            final_columns: initial_columns,
            ..Default::default()
        }
    }

    pub fn add_adjusted_columns(&mut self, columns: Vec<String>) {
        self.adjusted_columns = columns;
    }

    pub fn set_outcome_counts(&mut self, counts: Vec<(Outcome, usize)>) {
        self.outcome_counts = counts;
    }

    pub fn mark_notes_dropped(&mut self) {
        self.notes_dropped = true;
    }

    pub fn set_final_shape(&mut self, rows: usize, columns: usize) {
        self.final_rows = rows;
        self.final_columns = columns;
    }

    pub fn add_output(&mut self, path: PathBuf) {
        self.outputs.push(path);
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_eda_time(&mut self, elapsed: Duration) {
        self.eda_time = elapsed;
    }

    pub fn set_transform_time(&mut self, elapsed: Duration) {
        self.transform_time = elapsed;
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = elapsed;
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.eda_time + self.transform_time + self.save_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows (in → out)"),
            Cell::new(format!("{} → {}", self.initial_rows, self.final_rows)).fg(
                if self.initial_rows == self.final_rows {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
        ]);

        table.add_row(vec![
            Cell::new("🧮 Columns (in → out)"),
            Cell::new(format!("{} → {}", self.initial_columns, self.final_columns)),
        ]);

        table.add_row(vec![
            Cell::new("📐 Adjusted columns added"),
            Cell::new(self.adjusted_columns.len()).fg(Color::Cyan),
        ]);

        table.add_row(vec![
            Cell::new("✏️  Team names fixed"),
            Cell::new(self.names_fixed).fg(if self.names_fixed == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🗒️  Notes column"),
            Cell::new(if self.notes_dropped { "dropped" } else { "kept" }),
        ]);

        table.add_row(vec![
            Cell::new("🏷️  Rank as category"),
            Cell::new(if self.rank_recast { "recast" } else { "already text" }),
        ]);

        for (outcome, count) in &self.outcome_counts {
            table.add_row(vec![
                Cell::new(format!("🏆 {} = Yes", outcome.column_name())),
                Cell::new(count).fg(Color::Green),
            ]);
        }

        table.add_row(vec![
            Cell::new("⏱  Total time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64()))
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.outputs.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("FILES WRITTEN").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for path in &self.outputs {
                println!("        {} {}", style("•").dim(), path.display());
            }
        }
    }
}
