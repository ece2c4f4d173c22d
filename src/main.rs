//! Topflight: Football League Statistics CLI Tool
//!
//! Explores a Big 5 European league team statistics dataset, writes the
//! analysis tables, scales season counts to a 38-game season and flags
//! Champions League, Europa League and relegation outcomes.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use topflight::cli::{self, confirm_overwrite, Cli, Commands};
use topflight::pipeline::{
    add_adjusted_columns, add_outcome_columns, drop_notes, explore, fix_team_names,
    load_dataset_with_progress, rank_as_category, save_dataset, OutcomeTable,
};
use topflight::report::{
    export_eda_summary, print_overview, render_correlation_heatmap, render_histograms,
    render_pair_plot,
    write_correlation_matrix, write_descriptive_statistics, write_missing_values,
    CleaningSummary, EDA_SUMMARY_FILE, HEATMAP_FILE, HISTOGRAM_FILE, PAIR_PLOT_FILE,
};
use topflight::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success, RunConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Outcomes { output } => cli::outcomes::run_export_outcomes(output),
        };
    }

    // Main cleaning pipeline - require input
    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let output_path = cli
        .output_path()
        .ok_or_else(|| anyhow::anyhow!("Could not derive an output path from the input"))?;
    let tables_dir = cli
        .tables_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not derive a tables directory from the input"))?;

    if !cli.no_confirm && !confirm_overwrite(&output_path)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    // A broken outcome table should fail before any work is done
    let outcome_table = match &cli.outcome_table {
        Some(path) => OutcomeTable::from_path(path)?,
        None => OutcomeTable::builtin()?,
    };

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&RunConfig {
        input,
        output: &output_path,
        tables_dir: &tables_dir,
        outcome_table: cli.outcome_table.as_deref(),
        graphs: cli.graphs,
        correlation_threshold: cli.correlation_threshold,
    });

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let (mut df, rows, cols, memory_mb) =
        load_dataset_with_progress(input, cli.infer_schema_length)?;
    print_success("Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let mut summary = CleaningSummary::new(rows, cols);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Step 2: Exploratory analysis on the data as loaded
    print_step_header(2, "Exploratory Data Analysis");

    let step_start = Instant::now();
    let spinner = create_spinner("Exploring dataset...");
    let eda = explore(&df, cli.head_rows)?;
    finish_with_success(&spinner, "Exploratory analysis complete");

    print_overview(&eda, cli.correlation_threshold);

    std::fs::create_dir_all(&tables_dir).with_context(|| {
        format!("Failed to create tables directory: {}", tables_dir.display())
    })?;

    let path = write_descriptive_statistics(&eda, &tables_dir)?;
    print_success(&format!("Descriptive statistics written to {}", path.display()));
    summary.add_output(path);

    let (path, listed) = write_missing_values(&eda, &tables_dir)?;
    if listed == 0 {
        print_info("No column has missing values");
    } else {
        print_count("column(s) with missing values", listed, None);
    }
    summary.add_output(path);

    if cli.export_eda {
        let path = tables_dir.join(EDA_SUMMARY_FILE);
        export_eda_summary(&eda, input, cli.correlation_threshold, &path)?;
        print_success("EDA summary exported");
        summary.add_output(path);
    }

    if cli.graphs {
        let path = tables_dir.join(HISTOGRAM_FILE);
        let panels = render_histograms(&df, &path)?;
        if panels > 0 {
            print_count("histogram(s) drawn", panels, None);
            summary.add_output(path);
        }

        let path = tables_dir.join(HEATMAP_FILE);
        if render_correlation_heatmap(&eda.correlation, &path)? {
            print_success("Correlation heatmap drawn");
            summary.add_output(path);
        }

        let path = tables_dir.join(PAIR_PLOT_FILE);
        let side = render_pair_plot(&df, &path)?;
        if side > 0 {
            print_success(&format!("Pair plot drawn ({0} x {0} panels)", side));
            summary.add_output(path);
        }
    } else {
        print_info("Plots skipped (enable with --graphs)");
    }

    let eda_elapsed = step_start.elapsed();
    summary.set_eda_time(eda_elapsed);
    print_step_time(eda_elapsed);

    // Step 3: Season-length normalisation
    print_step_header(3, "Season Normalisation");

    let step_start = Instant::now();
    let adjusted = add_adjusted_columns(&mut df)?;
    print_count("adjusted column(s) added", adjusted.len(), Some("(per 38 games)"));
    summary.add_adjusted_columns(adjusted);

    // Step 4: Corrections
    print_step_header(4, "Data Corrections");

    summary.names_fixed = fix_team_names(&mut df)?;
    if summary.names_fixed == 0 {
        print_info("No team names needed fixing");
    } else {
        print_count("team name(s) fixed", summary.names_fixed, None);
    }

    summary.rank_recast = rank_as_category(&mut df)?;
    if summary.rank_recast {
        print_success("Rank stored as a category");
    }

    // Step 5: Outcome classification
    print_step_header(5, "Outcome Classification");

    let spinner = create_spinner("Classifying outcomes...");
    let counts = add_outcome_columns(&mut df, &outcome_table)?;
    drop_notes(&mut df)?;
    finish_with_success(&spinner, "Outcome columns added");

    for (outcome, count) in &counts {
        print_count(&format!("row(s) with {} = Yes", outcome.column_name()), *count, None);
    }
    summary.set_outcome_counts(counts);
    summary.mark_notes_dropped();

    let transform_elapsed = step_start.elapsed();
    summary.set_transform_time(transform_elapsed);
    print_step_time(transform_elapsed);

    // Step 6: Save output
    print_step_header(6, "Save Results");

    let step_start = Instant::now();
    let path = write_correlation_matrix(&eda, &tables_dir)?;
    print_success(&format!("Correlation matrix written to {}", path.display()));
    summary.add_output(path);

    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut df, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
    summary.add_output(output_path);

    let (rows, cols) = df.shape();
    summary.set_final_shape(rows, cols);
    let save_elapsed = step_start.elapsed();
    summary.set_save_time(save_elapsed);
    print_step_time(save_elapsed);

    summary.display();
    print_completion();

    Ok(())
}
