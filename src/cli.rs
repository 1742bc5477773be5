use std::path::PathBuf;

use clap::Parser;

/// Default paths match the `az resource list --output json > resources.json`
/// export workflow.
pub const DEFAULT_INPUT: &str = "resources.json";
pub const DEFAULT_OUTPUT: &str = "azure-resource-dependency-matrix.csv";

#[derive(Parser)]
#[command(name = "azmatrix")]
#[command(version)]
#[command(about = "Classify an Azure resource export into a migration dependency matrix", long_about = None)]
pub struct Cli {
    /// Resource export to read (az resource list --output json)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print per-category row counts after writing the matrix
    #[arg(short, long)]
    pub summary: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
