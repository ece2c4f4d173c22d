//! Terminal styling utilities for the pipeline report

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static BALL: Emoji<'_, '_> = Emoji("⚽ ", "");
pub static TROPHY: Emoji<'_, '_> = Emoji("🏆 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     _____ ___  ___ ___ _    ___ ___ _  _ _____
    |_   _/ _ \| _ \ __| |  |_ _/ __| || |_   _|
      | || (_) |  _/ _|| |__ | | (_ | __ | | |
      |_| \___/|_| |_| |____|___\___|_||_| |_|
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}{}",
        BALL,
        style("Big 5 league team stats, explored and cleaned").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Everything shown in the configuration card
pub struct RunConfig<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub tables_dir: &'a Path,
    pub outcome_table: Option<&'a Path>,
    pub graphs: bool,
    pub correlation_threshold: f64,
}

/// Print configuration card
pub fn print_config(config: &RunConfig) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);
    let outcome_source = config
        .outcome_table
        .map(|p| truncate_path(p, 38))
        .unwrap_or_else(|| "built-in".to_string());

    println!("    ┌{}┐", line);
    println!("    │ {:<width$}│", style("⚙️  Configuration").cyan().bold(), width = box_width - 3);
    println!("    ├{}┤", line);
    println!("    │  {}Input:   {:<39}│", FOLDER, truncate_path(config.input, 38));
    println!("    │  {}Output:  {:<39}│", SAVE, truncate_path(config.output, 38));
    println!("    │  {}Tables:  {:<39}│", CHART, truncate_path(config.tables_dir, 38));
    println!("    ├{}┤", line);
    println!("    │  {}Outcome table:         {:<25}│", TROPHY, outcome_source);
    println!(
        "    │  {}Plots:                 {:<25}│",
        CHART,
        if config.graphs { "enabled" } else { "disabled" }
    );
    println!(
        "    │  {}Correlation highlight: {:<25}│",
        CHART,
        style(format!("{:.2}", config.correlation_threshold)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print how long a step took
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("⏱  {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Topflight run complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
