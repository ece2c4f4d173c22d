//! `outcomes` subcommand: dump the built-in outcome table

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::pipeline::{Outcome, OutcomeTable};

/// Write the built-in outcome table to `output` and list what it covers
pub fn run_export_outcomes(output: &Path) -> Result<()> {
    let table = OutcomeTable::builtin()?;
    table.write_json(output)?;

    println!(
        "\n {} Outcome table written to {}",
        style("◆").cyan().bold(),
        style(output.display()).dim()
    );
    if let Some(source) = table.source() {
        println!("   Source: {}", style(source).dim());
    }
    for outcome in Outcome::ALL {
        println!(
            "   {}: {} listings",
            outcome.column_name(),
            style(table.listing_count(outcome)).yellow()
        );
    }
    println!();

    Ok(())
}
