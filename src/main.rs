mod classify;
mod cli;
mod model;
mod report;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    run(&cli)
}

/// Load the export, annotate every record, write the matrix.
fn run(cli: &Cli) -> Result<()> {
    let resources = report::load_resources(&cli.input)?;
    log::info!(
        "Loaded {} resources from {}",
        resources.len(),
        cli.input.display()
    );
    if resources.is_empty() && !cli.quiet {
        ui::warn(&format!("No resources found in {}", cli.input.display()));
    }

    let rows = report::build_matrix(&resources);
    report::write_csv(&rows, &cli.output)?;

    if cli.summary {
        report::print_summary(&rows);
    }

    if !cli.quiet {
        ui::success(&format!(
            "Dependency matrix exported as '{}'",
            cli.output.display()
        ));
    }

    Ok(())
}
